// librepeated/src/error.rs

use thiserror::Error;

use crate::types::Opcode;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// A descriptor field does not fit its bit width
    #[error("invalid command descriptor: {field}={value:#x} exceeds {max:#x}")]
    InvalidDescriptor {
        /// Name of the offending field
        field: &'static str,
        /// Value supplied
        value: u32,
        /// Largest value the field holds
        max: u32,
    },

    /// Name missing from the primitive size table
    #[error("unknown primitive type: {0:?}")]
    UnknownPrimitiveType(String),

    /// Operation on a closed device
    #[error("device not open")]
    DeviceNotOpen,

    /// Bytes are pending but there is no pattern to tile
    #[error("read requested with no pattern set")]
    EmptyPattern,

    /// Opcode outside the device's command set
    #[error("unknown control command {0}")]
    UnknownCommand(Opcode),

    /// Control argument the transport cannot pass on
    #[error("invalid control payload: {0}")]
    InvalidPayload(String),

    /// Malformed configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Device output differs from the tiled pattern
    #[error("pattern mismatch: expected {expected:02x?}, got {actual:02x?}")]
    PatternMismatch {
        /// Pattern tiled to the written length
        expected: Vec<u8>,
        /// Bytes the device returned
        actual: Vec<u8>,
    },

    /// A thread panicked while holding the device lock
    #[error("device lock poisoned")]
    LockPoisoned,

    /// No transport given and no device node present
    #[error("device not found")]
    DeviceNotFound,

    /// Underlying I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // 実機 transport を後から有効化できるように optional dependency にしている
    /// Control call rejected by the driver
    #[cfg(feature = "chardev")]
    #[error("ioctl failed: {0}")]
    Errno(#[from] nix::errno::Errno),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
