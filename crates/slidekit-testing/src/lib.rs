//! Testing utilities and harness for slidekit

pub mod recorder;
pub mod robot;

pub use recorder::{GateEvent, GateRecorder};
pub use robot::{SlideRobot, TRACK_Y};

pub mod prelude {
    pub use crate::recorder::*;
    pub use crate::robot::*;
}
