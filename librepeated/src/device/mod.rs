// librepeated/src/device/mod.rs

/// Open/closed lifecycle and control dispatch
pub mod handle;
/// Mutex wrapper for several callers
pub mod shared;
/// Pattern and pending-length state machine
pub mod state;

pub use handle::RepeatingPatternDevice;
pub use shared::SharedDevice;
pub use state::DeviceState;
