// librepeated/src/prelude.rs

pub use crate::config::SessionConfig;
pub use crate::device::{DeviceState, RepeatingPatternDevice, SharedDevice};
pub use crate::exerciser::{ExercisePlan, ExerciseReport, run_exercise};
pub use crate::ioctl::{Command, CommandSet, control_no_payload, control_with_payload};
pub use crate::session::{Session, SessionBuilder};
pub use crate::transport::Transport;
pub use crate::{CommandDescriptor, Direction, Error, Opcode, PrimitiveType, Result};
