// librepeated/src/session/handle.rs

use std::path::Path;

use log::debug;

use crate::config::SessionConfig;
use crate::ioctl::{Command, CommandSet};
use crate::transport::Transport;
use crate::Result;

/// Caller side of an opened device: computes opcodes from its own
/// `CommandSet` and drives the transport.
pub struct Session {
    transport: Box<dyn Transport>,
    commands: CommandSet,
}

impl Session {
    /// Create a Session from an already-opened Transport. This is primarily
    /// intended for tests where a MockTransport is provided.
    pub fn new_with_transport(transport: Box<dyn Transport>, config: &SessionConfig) -> Result<Self> {
        let commands = config.command_set()?;
        debug!(
            "session on {}: set_pattern={} reset={}",
            transport.path().display(),
            commands.set_pattern,
            commands.reset
        );
        Ok(Self {
            transport,
            commands,
        })
    }

    /// Opcodes this session sends.
    pub fn command_set(&self) -> &CommandSet {
        &self.commands
    }

    /// Node the transport was opened on.
    pub fn path(&self) -> &Path {
        self.transport.path()
    }

    /// Set-pattern control call.
    pub fn set_pattern(&mut self, pattern: &[u8]) -> Result<()> {
        self.transport
            .control(&self.commands, &Command::SetPattern(pattern.to_vec()))
    }

    /// Reset control call.
    pub fn reset(&mut self) -> Result<()> {
        self.transport.control(&self.commands, &Command::Reset)
    }

    /// Bulk write; returns the accepted count.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.transport.write(data)
    }

    /// Bulk read of at most `max_len` bytes.
    pub fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.transport.read(max_len)
    }

    /// Close the underlying transport.
    pub fn close(mut self) -> Result<()> {
        debug!("closing session on {}", self.transport.path().display());
        self.transport.close()
    }
}
