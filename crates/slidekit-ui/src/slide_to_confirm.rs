//! The slide-to-confirm control as a host sees it.
//!
//! Pointer events open a drag session once they pass the touch slop, settle
//! animations are stepped from the runtime's frame clock, and every frame can
//! be captured as a [`SlideFrame`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slidekit_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use slidekit_foundation::gesture_constants::DRAG_THRESHOLD;
use slidekit_foundation::{
    Anchor, CommandGate, GesturePhase, GestureStateMachine, SlideConfig, TrackGeometry,
};
use slidekit_graphics::{Density, Point};

use crate::pointer::{PointerEvent, PointerEventKind};
use crate::render::{SlideFrame, SlideRenderer};

/// Pointer bookkeeping between Down and Up.
#[derive(Debug, Clone, Copy)]
struct PointerTracking {
    press_x: f32,
    last_x: f32,
    slop_passed: bool,
}

struct SlideInner {
    machine: GestureStateMachine,
    frame_clock: FrameClock,
    registration: Option<FrameCallbackRegistration>,
    pointer: Option<PointerTracking>,
    density: Density,
    width_px: Option<f32>,
}

impl SlideInner {
    fn hit_test(&self, position: Point) -> bool {
        let Some(width) = self.width_px else {
            return false;
        };
        let height = self.machine.config().track_height.to_px(self.density);
        (0.0..=width).contains(&position.x) && (0.0..=height).contains(&position.y)
    }

    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let x = event.position.x;
        match event.kind {
            PointerEventKind::Down => {
                if !self.machine.is_enabled() || !self.hit_test(event.position) {
                    return false;
                }
                self.pointer = Some(PointerTracking {
                    press_x: x,
                    last_x: x,
                    slop_passed: false,
                });
                true
            }
            PointerEventKind::Move => {
                if !x.is_finite() {
                    return self.pointer.is_some();
                }
                let Some(tracking) = self.pointer.as_mut() else {
                    return false;
                };
                if !tracking.slop_passed {
                    let travelled = x - tracking.press_x;
                    if travelled.abs() <= DRAG_THRESHOLD {
                        return true;
                    }
                    if !self.machine.begin_drag() {
                        self.pointer = None;
                        return false;
                    }
                    tracking.slop_passed = true;
                    tracking.last_x = x;
                    let delta = travelled - DRAG_THRESHOLD.copysign(travelled);
                    self.machine.update_drag_at(delta, event.time_millis);
                    return true;
                }
                let delta = x - tracking.last_x;
                tracking.last_x = x;
                self.machine.update_drag_at(delta, event.time_millis);
                true
            }
            PointerEventKind::Up => {
                let Some(tracking) = self.pointer.take() else {
                    return false;
                };
                if !tracking.slop_passed {
                    return false;
                }
                // The release sample lets a held pointer read as stopped.
                let delta = if x.is_finite() { x - tracking.last_x } else { 0.0 };
                self.machine.update_drag_at(delta, event.time_millis);
                self.machine.end_drag_tracked();
                true
            }
            PointerEventKind::Cancel => {
                let Some(tracking) = self.pointer.take() else {
                    return false;
                };
                if tracking.slop_passed {
                    self.machine.end_drag(0.0);
                }
                true
            }
        }
    }
}

/// Cheap, clonable handle to one slide-to-confirm control.
///
/// The haptic and commit callbacks run while the control is borrowed. The
/// only call they may make back into it is [`set_busy`](Self::set_busy),
/// which is applied as soon as the callback returns.
#[derive(Clone)]
pub struct SlideToConfirm {
    inner: Rc<RefCell<SlideInner>>,
    queued_busy: Rc<Cell<Option<bool>>>,
}

impl SlideToConfirm {
    pub fn new(
        runtime: &RuntimeHandle,
        config: SlideConfig,
        density: Density,
        gate: CommandGate,
        initially_busy: bool,
    ) -> Self {
        let machine = GestureStateMachine::new(config, density, gate, initially_busy);
        Self {
            inner: Rc::new(RefCell::new(SlideInner {
                machine,
                frame_clock: runtime.frame_clock(),
                registration: None,
                pointer: None,
                density,
                width_px: None,
            })),
            queued_busy: Rc::new(Cell::new(None)),
        }
    }

    /// Feeds one pointer event. Returns whether the control consumed it.
    pub fn on_pointer_event(&self, event: &PointerEvent) -> bool {
        self.dispatch(|inner| inner.on_pointer_event(event))
    }

    /// External busy signal. Disables input and moves the thumb to End while set.
    pub fn set_busy(&self, busy: bool) {
        if self.inner.try_borrow_mut().is_err() {
            log::debug!("busy = {busy} queued until the current callback returns");
            self.queued_busy.set(Some(busy));
            return;
        }
        self.dispatch(|inner| inner.machine.set_busy(busy));
    }

    /// Host-driven move to `anchor`, independent of the busy signal.
    pub fn animate_to(&self, anchor: Anchor) {
        self.dispatch(|inner| inner.machine.animate_to(anchor));
    }

    /// Reports the measured track width in pixels.
    pub fn on_size_changed(&self, width_px: f32) {
        self.dispatch(|inner| {
            let width_px = if width_px.is_finite() {
                width_px.max(0.0)
            } else {
                log::warn!("non-finite track width {width_px}; treating as 0");
                0.0
            };
            inner.width_px = Some(width_px);
            let geometry =
                TrackGeometry::from_width(width_px, inner.machine.config(), inner.density);
            inner.machine.update_track(geometry);
        });
    }

    pub fn frame(&self) -> SlideFrame {
        SlideFrame::capture(&self.inner.borrow().machine)
    }

    pub fn render(&self, renderer: &mut dyn SlideRenderer) {
        let frame = self.frame();
        renderer.render(&frame);
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().machine.is_enabled()
    }

    pub fn phase(&self) -> GesturePhase {
        self.inner.borrow().machine.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().machine.is_animating()
    }

    /// Whether a frame callback is queued for the next settle tick.
    pub fn has_pending_frame(&self) -> bool {
        self.inner
            .borrow()
            .registration
            .as_ref()
            .is_some_and(FrameCallbackRegistration::is_active)
    }

    /// Read access to the underlying state machine.
    pub fn inspect<R>(&self, f: impl FnOnce(&GestureStateMachine) -> R) -> R {
        f(&self.inner.borrow().machine)
    }

    fn dispatch<R>(&self, f: impl FnOnce(&mut SlideInner) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        Self::after_dispatch(&self.inner, &self.queued_busy);
        result
    }

    fn after_dispatch(this: &Rc<RefCell<SlideInner>>, queued: &Rc<Cell<Option<bool>>>) {
        while let Some(busy) = queued.take() {
            this.borrow_mut().machine.set_busy(busy);
        }
        Self::schedule_frame(this, queued);
    }

    fn schedule_frame(this: &Rc<RefCell<SlideInner>>, queued: &Rc<Cell<Option<bool>>>) {
        let frame_clock = {
            let mut inner = this.borrow_mut();
            if !inner.machine.is_animating() {
                inner.registration = None;
                return;
            }
            if inner.registration.is_some() {
                return;
            }
            inner.frame_clock.clone()
        };
        let weak = Rc::downgrade(this);
        let queued_for_frame = Rc::clone(queued);
        let registration = frame_clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, &queued_for_frame, time);
            }
        });
        if !registration.is_active() {
            log::warn!("runtime is gone; settle animation cannot advance");
        }
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(
        this: &Rc<RefCell<SlideInner>>,
        queued: &Rc<Cell<Option<bool>>>,
        frame_time_nanos: u64,
    ) {
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            inner.machine.on_frame(frame_time_nanos);
        }
        Self::after_dispatch(this, queued);
    }
}

impl std::fmt::Debug for SlideToConfirm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("SlideToConfirm")
                .field("phase", &inner.machine.phase())
                .field("offset", &inner.machine.current_offset())
                .field("width_px", &inner.width_px)
                .finish(),
            Err(_) => f.write_str("SlideToConfirm { <borrowed> }"),
        }
    }
}

#[cfg(test)]
#[path = "tests/slide_to_confirm_tests.rs"]
mod tests;
