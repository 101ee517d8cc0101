//! Single authority over the gesture state.
//!
//! Phases cycle `Idle(anchor) -> Dragging -> Settling(anchor) -> Idle(anchor)`,
//! and `Idle -> Settling` for host-driven transitions. The host feeds pointer
//! deltas, release velocity, anchor bounds, the busy signal and frame times;
//! everything else is decided here.

use slidekit_animation::{AnimationDriver, DriverTick, MotionStyle, RunId};
use slidekit_graphics::Density;

use crate::anchors::{Anchor, AnchorBounds, TrackGeometry};
use crate::command_gate::CommandGate;
use crate::config::SlideConfig;
use crate::gesture_constants::{MAX_FLING_VELOCITY, SETTLE_EPSILON};
use crate::progress::progress;
use crate::threshold::ThresholdDecision;
use crate::velocity_tracker::VelocityTracker1D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle(Anchor),
    Dragging,
    Settling(Anchor),
}

/// What started a settle animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleCause {
    /// The user released a drag.
    Release,
    /// The host requested the anchor (busy signal or `animate_to`).
    External,
}

/// Transient state of one pointer drag.
#[derive(Debug, Clone)]
struct DragSession {
    total_delta: f32,
    velocity: VelocityTracker1D,
}

impl DragSession {
    fn new() -> Self {
        Self {
            total_delta: 0.0,
            velocity: VelocityTracker1D::differential(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingSettle {
    run: RunId,
    anchor: Anchor,
    cause: SettleCause,
}

#[derive(Debug)]
pub struct GestureStateMachine {
    config: SlideConfig,
    decision: ThresholdDecision,
    bounds: Option<AnchorBounds>,
    /// NaN until the first measurement arrives.
    offset: f32,
    settled: Anchor,
    target: Anchor,
    busy: bool,
    drag: Option<DragSession>,
    driver: AnimationDriver,
    settle: Option<PendingSettle>,
    deferred: Option<Anchor>,
    gate: CommandGate,
}

impl GestureStateMachine {
    /// Starts idle at Start, or idle at End when `initially_busy`.
    pub fn new(
        config: SlideConfig,
        density: Density,
        mut gate: CommandGate,
        initially_busy: bool,
    ) -> Self {
        let config = config.sanitized();
        let initial = if initially_busy {
            gate.disarm();
            Anchor::End
        } else {
            Anchor::Start
        };
        Self {
            decision: ThresholdDecision::new(&config, density),
            config,
            bounds: None,
            offset: f32::NAN,
            settled: initial,
            target: initial,
            busy: initially_busy,
            drag: None,
            driver: AnimationDriver::new(),
            settle: None,
            deferred: None,
            gate,
        }
    }

    /// Opens a drag session, cancelling any settle animation.
    ///
    /// Returns whether a session is open afterwards. Rejected while busy.
    pub fn begin_drag(&mut self) -> bool {
        if !self.is_enabled() {
            log::debug!("drag rejected while busy");
            return false;
        }
        if self.drag.is_some() {
            return true;
        }
        if let Some(pending) = self.settle.take() {
            self.driver.cancel();
            log::debug!("drag interrupts settle toward {:?}", pending.anchor);
        }
        self.target = self.settled;
        self.drag = Some(DragSession::new());
        log::debug!("drag started at {:.1}px", self.current_offset());
        true
    }

    /// Moves the thumb by `delta`, clamped to the anchor bounds.
    pub fn update_drag(&mut self, delta: f32) {
        if !self.is_enabled() || !delta.is_finite() {
            return;
        }
        let Some(bounds) = self.bounds else {
            return;
        };
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        session.total_delta += delta;
        let base = if self.offset.is_finite() {
            self.offset
        } else {
            bounds.offset_of(self.settled)
        };
        self.offset = bounds.clamp(base + delta);
        if self.settled == Anchor::End
            && (self.offset - bounds.end()).abs() > SETTLE_EPSILON
            && !self.gate.is_armed()
        {
            log::trace!("thumb left End; commit re-armed");
            self.gate.arm();
        }
    }

    /// [`update_drag`](Self::update_drag) that also records the sample for the
    /// session's release velocity estimate.
    pub fn update_drag_at(&mut self, delta: f32, time_ms: i64) {
        if !self.is_enabled() {
            return;
        }
        if let Some(session) = self.drag.as_mut() {
            session.velocity.add_data_point(time_ms, delta);
        }
        self.update_drag(delta);
    }

    /// Ends the drag using the velocity tracked by [`update_drag_at`](Self::update_drag_at).
    pub fn end_drag_tracked(&mut self) -> Option<Anchor> {
        let velocity = self.drag.as_ref()?.velocity.release_velocity();
        self.end_drag(velocity)
    }

    /// Closes the drag session and starts settling. Returns the chosen anchor.
    ///
    /// The release speed is capped to [`MAX_FLING_VELOCITY`].
    ///
    /// A host transition requested mid-drag takes precedence over the release.
    pub fn end_drag(&mut self, release_velocity: f32) -> Option<Anchor> {
        let session = self.drag.take()?;
        let velocity = if release_velocity.is_finite() {
            release_velocity.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
        } else {
            log::warn!("non-finite release velocity {release_velocity}; treating as still");
            0.0
        };

        if let Some(anchor) = self.deferred.take() {
            log::debug!("applying deferred transition to {anchor:?} after drag");
            self.start_settle(anchor, SettleCause::External, self.snap_style());
            return Some(anchor);
        }

        let Some(bounds) = self.bounds else {
            self.target = self.settled;
            return Some(self.settled);
        };

        let mut decided = self.decision.decide(self.offset, velocity, bounds);
        if decided != self.settled && !self.gate.confirm(decided) {
            decided = self.settled;
        }
        log::debug!(
            "drag ended after {:.1}px at {:.1}px, settling to {decided:?}",
            session.total_delta,
            self.current_offset()
        );

        let style = if self.decision.is_fling(velocity) {
            MotionStyle::Decay {
                velocity,
                decay: self.decision.decay(),
                fallback: self.config.snap_spec,
            }
        } else {
            self.snap_style()
        };
        self.start_settle(decided, SettleCause::Release, style);
        Some(decided)
    }

    /// Host-driven transition. Deferred until the drag ends when one is active;
    /// the latest request wins. A settle already heading to `anchor` is kept.
    pub fn animate_to(&mut self, anchor: Anchor) {
        if self.drag.is_some() {
            log::debug!("deferring transition to {anchor:?} until drag ends");
            self.deferred = Some(anchor);
            return;
        }
        if let Some(pending) = self.settle {
            if pending.anchor == anchor {
                return;
            }
        }
        self.start_settle(anchor, SettleCause::External, self.snap_style());
    }

    /// External busy signal: disables dragging and moves to End while set.
    pub fn set_busy(&mut self, busy: bool) {
        if self.busy == busy {
            return;
        }
        self.busy = busy;
        log::debug!("busy = {busy}");
        if self.drag.is_some() && !busy {
            // Set and cleared within one drag: the release decides again.
            self.deferred = None;
            return;
        }
        self.animate_to(if busy { Anchor::End } else { Anchor::Start });
    }

    pub fn update_track(&mut self, geometry: TrackGeometry) {
        let bounds = AnchorBounds::from_geometry(geometry);
        self.update_anchors(bounds.start(), bounds.end());
    }

    /// Replaces the anchor offsets.
    ///
    /// Mid-drag or mid-settle the offset is clamped into the new range, not
    /// rescaled; a running settle is retargeted at its anchor's new offset.
    /// At rest the thumb follows its anchor.
    pub fn update_anchors(&mut self, start: f32, end: f32) {
        let bounds = AnchorBounds::new(start, end);
        let changed = self.bounds != Some(bounds);
        self.bounds = Some(bounds);
        if !changed {
            return;
        }
        log::debug!("anchors updated: start={} end={}", bounds.start(), bounds.end());

        match self.phase() {
            GesturePhase::Dragging => {
                self.offset = if self.offset.is_finite() {
                    bounds.clamp(self.offset)
                } else {
                    bounds.offset_of(self.settled)
                };
            }
            GesturePhase::Settling(anchor) => {
                self.offset = if self.offset.is_finite() {
                    bounds.clamp(self.offset)
                } else {
                    bounds.offset_of(self.settled)
                };
                if let Some(pending) = self.settle {
                    let to = bounds.offset_of(anchor);
                    if self.driver.target() != Some(to) {
                        self.start_settle(anchor, pending.cause, self.snap_style());
                    }
                }
            }
            GesturePhase::Idle(anchor) => {
                self.offset = bounds.offset_of(anchor);
            }
        }
    }

    /// Advances the settle animation to `frame_time_nanos`.
    ///
    /// Returns whether another frame is needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let pending = self.settle;
        match self.driver.tick(frame_time_nanos) {
            DriverTick::Idle => false,
            DriverTick::Running { run, value } => {
                if pending.map(|p| p.run) == Some(run) {
                    self.apply_animated_offset(value);
                    log::trace!("settle frame at {:.2}px", self.offset);
                }
                true
            }
            DriverTick::Completed { run, value } => {
                if let Some(pending) = pending.filter(|p| p.run == run) {
                    self.apply_animated_offset(value);
                    self.finish_settle(pending.anchor, pending.cause);
                }
                false
            }
        }
    }

    fn apply_animated_offset(&mut self, value: f32) {
        self.offset = match self.bounds {
            Some(bounds) => bounds.clamp(value),
            None => value,
        };
    }

    fn snap_style(&self) -> MotionStyle {
        MotionStyle::Snap(self.config.snap_spec)
    }

    fn start_settle(&mut self, anchor: Anchor, cause: SettleCause, style: MotionStyle) {
        self.driver.cancel();
        self.target = anchor;
        let Some(bounds) = self.bounds else {
            // Nothing to animate before the first measurement.
            self.finish_settle(anchor, cause);
            return;
        };
        let to = bounds.offset_of(anchor);
        let from = if self.offset.is_finite() {
            self.offset
        } else {
            to
        };
        if (from - to).abs() <= SETTLE_EPSILON {
            self.offset = to;
            self.finish_settle(anchor, cause);
            return;
        }
        let run = self.driver.animate(from, to, style);
        self.settle = Some(PendingSettle {
            run,
            anchor,
            cause,
        });
        log::debug!("settling {from:.1}px -> {to:.1}px ({anchor:?}, {cause:?})");
    }

    fn finish_settle(&mut self, anchor: Anchor, cause: SettleCause) {
        self.settle = None;
        self.settled = anchor;
        self.target = anchor;
        log::debug!("settled at {anchor:?}");
        match anchor {
            Anchor::Start => self.gate.arm(),
            Anchor::End => {
                if cause == SettleCause::Release || self.config.commit_on_external_settle {
                    self.gate.commit();
                } else {
                    self.gate.disarm();
                }
            }
        }
    }

    /// Thumb offset; `0` until the track has been measured.
    pub fn current_offset(&self) -> f32 {
        if self.offset.is_finite() {
            self.offset
        } else {
            0.0
        }
    }

    pub fn progress(&self) -> f32 {
        match self.bounds {
            Some(bounds) => progress(self.current_offset(), bounds),
            None => 0.0,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        if self.drag.is_some() {
            GesturePhase::Dragging
        } else if self.settle.is_some() {
            GesturePhase::Settling(self.target)
        } else {
            GesturePhase::Idle(self.settled)
        }
    }

    pub fn settled_anchor(&self) -> Anchor {
        self.settled
    }

    pub fn target_anchor(&self) -> Anchor {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        !self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn bounds(&self) -> Option<AnchorBounds> {
        self.bounds
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn gate(&self) -> &CommandGate {
        &self.gate
    }
}

#[cfg(test)]
#[path = "tests/state_machine_tests.rs"]
mod tests;
