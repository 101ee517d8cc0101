//! Robot-style driver for a [`SlideToConfirm`] on a headless runtime.
//!
//! The robot owns the runtime and a single timeline shared by pointer event
//! stamps and frame times, so scripted gestures and settle animations advance
//! together at 60 Hz.
//!
//! ```
//! use slidekit_testing::SlideRobot;
//!
//! let mut robot = SlideRobot::new(260.0);
//! robot.swipe(20.0, 240.0, 200);
//! robot.wait_for_idle();
//! assert_eq!(robot.recorder().commits(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use slidekit_core::{Runtime, FRAME_INTERVAL_60HZ_NANOS, NANOS_PER_MILLI};
use slidekit_foundation::{CommandGate, GesturePhase, SlideConfig};
use slidekit_graphics::Density;
use slidekit_ui::{PointerEvent, SlideFrame, SlideToConfirm};

use crate::recorder::GateRecorder;

/// Vertical position used for every scripted pointer event.
pub const TRACK_Y: f32 = 20.0;

/// Upper bound on frames drained by [`SlideRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 1_200;

pub struct SlideRobot {
    runtime: Runtime,
    slide: SlideToConfirm,
    recorder: GateRecorder,
    host_slot: Rc<RefCell<Option<SlideToConfirm>>>,
    now_nanos: u64,
    pointer_x: Option<f32>,
}

impl SlideRobot {
    /// Default config at baseline density, idle at Start.
    pub fn new(width_px: f32) -> Self {
        Self::with_config(width_px, SlideConfig::default(), Density::BASELINE, false)
    }

    pub fn with_config(
        width_px: f32,
        config: SlideConfig,
        density: Density,
        initially_busy: bool,
    ) -> Self {
        Self::with_gate(width_px, config, density, initially_busy, GateRecorder::gate)
    }

    pub fn with_gate(
        width_px: f32,
        config: SlideConfig,
        density: Density,
        initially_busy: bool,
        make_gate: impl FnOnce(&GateRecorder) -> CommandGate,
    ) -> Self {
        let recorder = GateRecorder::new();
        let gate = make_gate(&recorder);
        Self::assemble(width_px, config, density, initially_busy, recorder, gate, None)
    }

    /// A host that marks itself busy from inside the commit callback.
    pub fn busy_on_commit(width_px: f32, config: SlideConfig) -> Self {
        let recorder = GateRecorder::new();
        let host_slot: Rc<RefCell<Option<SlideToConfirm>>> = Rc::new(RefCell::new(None));
        let slot_in_gate = Rc::clone(&host_slot);
        let gate = recorder.gate_with(move || {
            if let Some(slide) = slot_in_gate.borrow().as_ref() {
                slide.set_busy(true);
            }
        });
        Self::assemble(
            width_px,
            config,
            Density::BASELINE,
            false,
            recorder,
            gate,
            Some(host_slot),
        )
    }

    fn assemble(
        width_px: f32,
        config: SlideConfig,
        density: Density,
        initially_busy: bool,
        recorder: GateRecorder,
        gate: CommandGate,
        host_slot: Option<Rc<RefCell<Option<SlideToConfirm>>>>,
    ) -> Self {
        let runtime = Runtime::default();
        let slide = SlideToConfirm::new(&runtime.handle(), config, density, gate, initially_busy);
        if let Some(slot) = &host_slot {
            *slot.borrow_mut() = Some(slide.clone());
        }
        let host_slot = host_slot.unwrap_or_default();
        slide.on_size_changed(width_px);
        Self {
            runtime,
            slide,
            recorder,
            host_slot,
            now_nanos: 0,
            pointer_x: None,
        }
    }

    pub fn slide(&self) -> &SlideToConfirm {
        &self.slide
    }

    pub fn recorder(&self) -> &GateRecorder {
        &self.recorder
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frame(&self) -> SlideFrame {
        self.slide.frame()
    }

    pub fn offset(&self) -> i32 {
        self.slide.frame().thumb_offset_px
    }

    pub fn phase(&self) -> GesturePhase {
        self.slide.phase()
    }

    /// Distance between the anchors.
    pub fn travel_px(&self) -> f32 {
        self.slide
            .inspect(|machine| machine.bounds().map_or(0.0, |bounds| bounds.travel()))
    }

    pub fn now_millis(&self) -> i64 {
        (self.now_nanos / NANOS_PER_MILLI) as i64
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.slide.set_busy(busy);
    }

    pub fn resize(&mut self, width_px: f32) {
        self.slide.on_size_changed(width_px);
    }

    /// Pointer down at `x`. Returns whether the control took the press.
    pub fn press(&mut self, x: f32) -> bool {
        self.pointer_x = Some(x);
        self.slide
            .on_pointer_event(&PointerEvent::down(x, TRACK_Y, self.now_millis()))
    }

    /// Advances one frame, then moves the pointer to `x`.
    pub fn move_to(&mut self, x: f32) -> bool {
        self.advance_frame();
        self.pointer_x = Some(x);
        self.slide
            .on_pointer_event(&PointerEvent::moved(x, TRACK_Y, self.now_millis()))
    }

    /// Moves to `to` in per-frame steps spread over `duration_ms`.
    pub fn move_by_steps(&mut self, to: f32, duration_ms: u64) {
        let from = self.pointer_x.unwrap_or(to);
        let steps = (duration_ms * NANOS_PER_MILLI / FRAME_INTERVAL_60HZ_NANOS).max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(from + (to - from) * fraction);
        }
    }

    pub fn release(&mut self) -> bool {
        let x = self.pointer_x.take().unwrap_or(0.0);
        self.slide
            .on_pointer_event(&PointerEvent::up(x, TRACK_Y, self.now_millis()))
    }

    pub fn cancel(&mut self) -> bool {
        self.pointer_x = None;
        self.slide
            .on_pointer_event(&PointerEvent::cancel(self.now_millis()))
    }

    /// Press at `from`, glide to `to` over `duration_ms`, release.
    pub fn swipe(&mut self, from: f32, to: f32, duration_ms: u64) {
        self.press(from);
        self.move_by_steps(to, duration_ms);
        self.release();
    }

    /// Press at `from`, glide to `to`, then hold still past the velocity
    /// window before releasing, so the release carries no speed.
    pub fn slow_swipe(&mut self, from: f32, to: f32, duration_ms: u64) {
        self.press(from);
        self.move_by_steps(to, duration_ms);
        self.advance_time(200);
        self.release();
    }

    /// Drains one 60 Hz frame. Returns whether another frame is wanted.
    pub fn advance_frame(&mut self) -> bool {
        self.now_nanos += FRAME_INTERVAL_60HZ_NANOS;
        self.runtime.handle().drain_frame_callbacks(self.now_nanos);
        self.runtime.needs_frame()
    }

    /// Drains frames covering `millis` of wall time.
    pub fn advance_time(&mut self, millis: u64) {
        let target = self.now_nanos + millis * NANOS_PER_MILLI;
        while self.now_nanos < target {
            self.advance_frame();
        }
    }

    /// Drains frames until nothing is scheduled.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.runtime.needs_frame() {
                return;
            }
            self.advance_frame();
        }
        panic!("slide never went idle: {:?}", self.slide);
    }
}

impl Drop for SlideRobot {
    fn drop(&mut self) {
        // The busy-on-commit host keeps a handle inside its own gate.
        self.host_slot.borrow_mut().take();
    }
}
