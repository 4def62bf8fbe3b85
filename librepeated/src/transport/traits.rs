// librepeated/src/transport/traits.rs

use std::path::Path;

use crate::Result;
use crate::ioctl::{Command, CommandSet};
use crate::types::Opcode;

/// Transport trait abstracts the control/bulk channel to an opened device
/// node away from the session logic. Opening by path is left to each
/// implementation's constructor.
pub trait Transport {
    /// Path the channel was opened on
    fn path(&self) -> &Path;

    /// Issue a control call with an in-payload
    fn ioctl(&mut self, opcode: Opcode, arg: &[u8]) -> Result<()>;

    /// Bulk write; returns the number of bytes the device accepted
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Bulk read of at most `max_len` bytes
    fn read(&mut self, max_len: usize) -> Result<Vec<u8>>;

    /// Close the channel. Further calls fail.
    fn close(&mut self) -> Result<()>;

    /// Send a high-level command using the opcodes of `set`. Default
    /// implementation encodes it into a plain `ioctl`.
    fn control(&mut self, set: &CommandSet, cmd: &Command) -> Result<()> {
        self.ioctl(cmd.opcode(set), cmd.payload())
    }
}
