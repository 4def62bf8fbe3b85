// librepeated/src/device/handle.rs

use log::{debug, warn};

use crate::device::state::DeviceState;
use crate::ioctl::{Command, CommandSet};
use crate::types::Opcode;
use crate::{Error, Result};

/// The repeating-pattern device: a lifecycle around one `DeviceState` plus
/// opcode dispatch for control calls.
///
/// State exists only between `open` and `close`; every operation on a closed
/// device fails with `Error::DeviceNotOpen` and changes nothing.
#[derive(Debug)]
pub struct RepeatingPatternDevice {
    commands: CommandSet,
    state: Option<DeviceState>,
}

impl RepeatingPatternDevice {
    /// A closed device answering to the reference `'r'` command set.
    pub fn new() -> Self {
        Self::with_commands(CommandSet::default())
    }

    /// A closed device answering to `commands`.
    pub fn with_commands(commands: CommandSet) -> Self {
        Self {
            commands,
            state: None,
        }
    }

    /// Opcodes this device dispatches on.
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Whether session state exists.
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Open the device. Opening an open device keeps its pattern and
    /// pending length and rewinds the cursor.
    pub fn open(&mut self) {
        match self.state.as_mut() {
            Some(state) => {
                debug!("device already open, rewinding cursor");
                let pos = state.position() as i64;
                state.seek(-pos);
            }
            None => {
                debug!("device opened");
                self.state = Some(DeviceState::new());
            }
        }
    }

    /// Close the device and discard its state.
    pub fn close(&mut self) -> Result<()> {
        self.state.take().ok_or(Error::DeviceNotOpen)?;
        debug!("device closed");
        Ok(())
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> Result<&DeviceState> {
        self.state.as_ref().ok_or(Error::DeviceNotOpen)
    }

    fn state_mut(&mut self) -> Result<&mut DeviceState> {
        self.state.as_mut().ok_or(Error::DeviceNotOpen)
    }

    /// Replace the pattern verbatim.
    pub fn set_pattern(&mut self, pattern: &[u8]) -> Result<()> {
        self.state_mut()?.set_pattern(pattern);
        Ok(())
    }

    /// Clear the pattern.
    pub fn reset(&mut self) -> Result<()> {
        self.state_mut()?.reset();
        Ok(())
    }

    /// Record the write length; the bytes are dropped.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.state_mut()?.write(buf))
    }

    /// Tiled pattern up to the pending length (idempotent).
    pub fn read(&self, max_len: usize) -> Result<Vec<u8>> {
        self.state()?.read(max_len)
    }

    /// Tiled pattern from the cursor, advancing it.
    pub fn read_at_cursor(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.state_mut()?.read_at_cursor(max_len)
    }

    /// Move the cursor, clamped to the pending length.
    pub fn seek(&mut self, delta: i64) -> Result<usize> {
        Ok(self.state_mut()?.seek(delta))
    }

    /// Execute an already-decoded command.
    pub fn execute(&mut self, cmd: &Command) -> Result<()> {
        match cmd {
            Command::SetPattern(pattern) => self.set_pattern(pattern),
            Command::Reset => self.reset(),
        }
    }

    /// Dispatch a control call by opcode.
    pub fn ioctl(&mut self, opcode: Opcode, arg: &[u8]) -> Result<()> {
        // closed devices report DeviceNotOpen before the opcode is examined
        self.state()?;
        let cmd = self.commands.decode(opcode, arg).inspect_err(|_| {
            warn!("rejecting unknown control call {}", opcode);
        })?;
        debug!("ioctl {} -> {:?}", opcode, cmd);
        self.execute(&cmd)
    }
}

impl Default for RepeatingPatternDevice {
    fn default() -> Self {
        Self::new()
    }
}
