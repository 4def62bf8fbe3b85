// librepeated/src/transport/mod.rs

/// Real character device backend
#[cfg(feature = "chardev")]
pub mod chardev;
/// In-process test transport
pub mod mock;
/// The `Transport` trait
pub mod traits;

#[cfg(feature = "chardev")]
pub use chardev::ChardevTransport;
pub use mock::{MockTransport, TransportCall};
pub use traits::Transport;
