// librepeated/src/lib.rs

//! librepeated
//!
//! Linux-style ioctl command codec and the repeating-pattern character
//! device it addresses.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
/// Repeating-pattern device model
pub mod device;
/// Crate error type
pub mod error;
pub mod exerciser;
/// ioctl command codec
pub mod ioctl;
/// Common re-exports
pub mod prelude;
/// Caller side of an opened device
pub mod session;
pub mod test_support;
/// Control/bulk channel to a device node
pub mod transport;
/// Codec value types
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the codec value types are available for consumers and for the
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
