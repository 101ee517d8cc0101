//! The demo screen around the control: a loading phase after each confirm,
//! and a scripted finger.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use slidekit_foundation::CommandGate;
use slidekit_ui::{PointerEvent, SlideToConfirm};

/// How long the pretend action keeps the control busy.
const LOADING_MILLIS: u64 = 2_000;

/// Vertical press position inside the track.
const PRESS_Y_DP: f32 = 28.0;

/// Marks itself loading when the control commits and clears it after
/// [`LOADING_MILLIS`].
pub struct LoadingHost {
    requested: Rc<Cell<bool>>,
    commits: Rc<Cell<u32>>,
    loading_until: Cell<Option<u64>>,
}

impl LoadingHost {
    pub fn new() -> Self {
        Self {
            requested: Rc::new(Cell::new(false)),
            commits: Rc::new(Cell::new(0)),
            loading_until: Cell::new(None),
        }
    }

    pub fn gate(&self) -> CommandGate {
        let requested = Rc::clone(&self.requested);
        let commits = Rc::clone(&self.commits);
        CommandGate::new(
            || log::info!("*bzzt* (haptic pulse)"),
            move || {
                commits.set(commits.get() + 1);
                requested.set(true);
            },
        )
    }

    /// Applies pending host state before the frame is drawn.
    pub fn update(&self, now_millis: u64, slide: &SlideToConfirm) {
        if self.requested.replace(false) {
            log::info!("unlock requested, loading for {LOADING_MILLIS} ms");
            self.loading_until.set(Some(now_millis + LOADING_MILLIS));
            slide.set_busy(true);
        }
        if let Some(until) = self.loading_until.get() {
            if now_millis >= until {
                log::info!("loading finished");
                self.loading_until.set(None);
                slide.set_busy(false);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading_until.get().is_some() || self.requested.get()
    }

    pub fn commits(&self) -> u32 {
        self.commits.get()
    }
}

/// Timed pointer samples, replayed against the demo clock.
pub struct Script {
    events: VecDeque<(u64, PointerEvent)>,
}

impl Script {
    /// Partial swipe, full swipe, fling. Positions are in dp scaled by `density`.
    pub fn demo(density: f32) -> Self {
        let mut script = Self {
            events: VecDeque::new(),
        };
        script.swipe(300, 30.0, 120.0, 250, 150, density);
        script.swipe(1_500, 30.0, 330.0, 400, 150, density);
        script.swipe(5_500, 30.0, 150.0, 60, 0, density);
        script
    }

    /// Press at `from`, move to `to` over `duration_ms`, hold for `hold_ms`, release.
    fn swipe(
        &mut self,
        start_ms: u64,
        from: f32,
        to: f32,
        duration_ms: u64,
        hold_ms: u64,
        density: f32,
    ) {
        let y = PRESS_Y_DP * density;
        let (from, to) = (from * density, to * density);
        self.push(start_ms, PointerEvent::down(from, y, start_ms as i64));

        let steps = (duration_ms / 16).max(1);
        for step in 1..=steps {
            let at = start_ms + duration_ms * step / steps;
            let x = from + (to - from) * step as f32 / steps as f32;
            self.push(at, PointerEvent::moved(x, y, at as i64));
        }

        let release = start_ms + duration_ms + hold_ms;
        self.push(release, PointerEvent::up(to, y, release as i64));
    }

    fn push(&mut self, at_millis: u64, event: PointerEvent) {
        self.events.push_back((at_millis, event));
    }

    /// Removes and returns every event due by `now_millis`.
    pub fn due(&mut self, now_millis: u64) -> Vec<PointerEvent> {
        let mut due = Vec::new();
        while let Some((at, _)) = self.events.front() {
            if *at > now_millis {
                break;
            }
            if let Some((_, event)) = self.events.pop_front() {
                due.push(event);
            }
        }
        due
    }

    pub fn is_finished(&self) -> bool {
        self.events.is_empty()
    }
}
