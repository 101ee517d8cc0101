//! Single-run, frame-stepped animation driver.
//!
//! At most one run is active. Starting a run or cancelling drops the previous
//! one without a completion report, so completion is only ever observed for the
//! latest run and at most once.

use crate::motion::{Motion, MotionStyle};

/// Identifies one `animate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

/// Outcome of advancing the driver by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriverTick {
    /// No run is active.
    Idle,
    /// The active run moved to `value`.
    Running { run: RunId, value: f32 },
    /// The active run reached its target. Reported once per run.
    Completed { run: RunId, value: f32 },
}

struct ActiveRun {
    id: RunId,
    motion: Box<dyn Motion>,
    start_time_nanos: Option<u64>,
}

#[derive(Default)]
pub struct AnimationDriver {
    next_run: u64,
    active: Option<ActiveRun>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts moving from `from` toward `to`, superseding any active run.
    ///
    /// The run's clock starts at the first [`tick`](Self::tick) after this call.
    pub fn animate(&mut self, from: f32, to: f32, style: MotionStyle) -> RunId {
        if let Some(previous) = self.active.take() {
            log::trace!("run {} superseded", previous.id.0);
        }
        let to = if to.is_finite() { to } else { 0.0 };
        let from = if from.is_finite() {
            from
        } else {
            log::warn!("non-finite animation start {from}; starting at target {to}");
            to
        };

        self.next_run += 1;
        let id = RunId(self.next_run);
        self.active = Some(ActiveRun {
            id,
            motion: style.into_motion(from, to),
            start_time_nanos: None,
        });
        log::trace!("run {} animating {from} -> {to}", id.0);
        id
    }

    /// Drops the active run. No completion is reported for it.
    pub fn cancel(&mut self) -> Option<RunId> {
        let cancelled = self.active.take().map(|run| run.id);
        if let Some(id) = cancelled {
            log::trace!("run {} cancelled", id.0);
        }
        cancelled
    }

    pub fn tick(&mut self, frame_time_nanos: u64) -> DriverTick {
        let Some(run) = self.active.as_mut() else {
            return DriverTick::Idle;
        };
        let start = *run.start_time_nanos.get_or_insert(frame_time_nanos);
        let play_time = frame_time_nanos.saturating_sub(start);
        let id = run.id;

        if run.motion.is_finished_at(play_time) {
            let value = run.motion.target();
            self.active = None;
            DriverTick::Completed { run: id, value }
        } else {
            DriverTick::Running {
                run: id,
                value: run.motion.value_at(play_time),
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|run| run.id)
    }

    /// Target value of the active run.
    pub fn target(&self) -> Option<f32> {
        self.active.as_ref().map(|run| run.motion.target())
    }
}

impl std::fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("current_run", &self.current_run())
            .field("target", &self.target())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
