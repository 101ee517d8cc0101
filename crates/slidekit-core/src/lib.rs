//! Frame runtime for slidekit.
//!
//! Hosts drive the runtime by draining frame callbacks once per display frame.
//! Everything registered here runs on the single UI thread that owns the
//! [`Runtime`].

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub(crate) type FrameCallbackId = u64;

/// Nanoseconds per millisecond, used when converting frame times.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Frame interval of a 60 Hz display in nanoseconds.
pub const FRAME_INTERVAL_60HZ_NANOS: u64 = 16_666_667;
