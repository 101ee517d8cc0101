//! Platform abstraction traits for runtime services.
//!
//! These traits let the host platform own frame scheduling and time keeping,
//! so the gesture core never reaches for a windowing toolkit directly.

/// Schedules work for the slidekit runtime.
///
/// Implementations are responsible for triggering frame processing. They must
/// be safe to use from multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}
