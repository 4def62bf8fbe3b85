// librepeated/src/ioctl/mod.rs

/// Opcode encoding and decoding
pub mod codec;
/// Commands of the repeating-pattern device
pub mod commands;

pub use codec::{control_no_payload, control_with_payload, decode, encode, size_of_primitive};
pub use commands::{Command, CommandSet, RESET, SET_PATTERN};
