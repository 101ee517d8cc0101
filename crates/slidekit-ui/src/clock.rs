//! Wall-clock time source for hosts without their own frame timestamps.

use slidekit_core::{Clock, NANOS_PER_MILLI};
use web_time::Instant;

/// [`Clock`] backed by `web_time::Instant`, so it also works on wasm.
///
/// Frame times are reported relative to the clock's creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Nanoseconds since the clock was created, for `drain_frame_callbacks`.
    pub fn frame_time_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Milliseconds since the clock was created, for pointer event stamps.
    pub fn event_time_millis(&self) -> i64 {
        i64::try_from(self.frame_time_nanos() / NANOS_PER_MILLI).unwrap_or(i64::MAX)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> u64 {
        u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_time_is_monotonic() {
        let clock = MonotonicClock::new();
        let first = clock.frame_time_nanos();
        let second = clock.frame_time_nanos();
        assert!(second >= first);
        assert!(clock.event_time_millis() >= 0);
    }

    #[test]
    fn elapsed_since_now_is_small() {
        let clock = MonotonicClock::default();
        let start = clock.now();
        assert!(clock.elapsed_millis(start) < 1_000);
    }
}
