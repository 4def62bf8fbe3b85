// librepeated/src/session/mod.rs

/// Session construction
pub mod builder;
/// Opened session
pub mod handle;

pub use builder::SessionBuilder;
pub use handle::Session;
