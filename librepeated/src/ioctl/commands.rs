// librepeated/src/ioctl/commands.rs

use std::ffi::c_int;
use std::mem::size_of;

use crate::constants::{REPEATED_MAGIC, RESET_NR, SET_PATTERN_NR};
use crate::ioctl::codec::{control_no_payload, control_with_payload, pack};
use crate::types::{Direction, Opcode};
use crate::{Error, Result};

/// `_IOW('r', 0, int)`
pub const SET_PATTERN: Opcode = Opcode::from_raw(pack(
    Direction::Write,
    size_of::<c_int>() as u32,
    REPEATED_MAGIC as u32,
    SET_PATTERN_NR as u32,
));

/// `_IO('r', 1)`
pub const RESET: Opcode = Opcode::from_raw(pack(
    Direction::None,
    0,
    REPEATED_MAGIC as u32,
    RESET_NR as u32,
));

/// High-level control command. New commands should be added here together
/// with their opcode in `CommandSet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the pattern with the given bytes
    SetPattern(Vec<u8>),
    /// Clear the pattern
    Reset,
}

impl Command {
    /// Opcode of this command within `set`.
    pub fn opcode(&self, set: &CommandSet) -> Opcode {
        match self {
            Self::SetPattern(_) => set.set_pattern,
            Self::Reset => set.reset,
        }
    }

    /// Payload passed alongside the opcode.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::SetPattern(pattern) => pattern.as_slice(),
            Self::Reset => &[],
        }
    }
}

/// Opcodes of one device family, derived from the family tag and the
/// sequence numbers both sides agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    /// Family tag the opcodes were derived from
    pub family_tag: u8,
    /// `_IOW(family_tag, 0, int)`
    pub set_pattern: Opcode,
    /// `_IO(family_tag, 1)`
    pub reset: Opcode,
}

impl CommandSet {
    /// Derive the command set of `family_tag`.
    pub fn for_family(family_tag: u8) -> Result<Self> {
        Ok(Self {
            family_tag,
            set_pattern: control_with_payload(family_tag, SET_PATTERN_NR, Direction::Write, "int")?,
            reset: control_no_payload(family_tag, RESET_NR)?,
        })
    }

    /// Resolve an incoming control call into a command.
    pub fn decode(&self, opcode: Opcode, arg: &[u8]) -> Result<Command> {
        if opcode == self.set_pattern {
            Ok(Command::SetPattern(arg.to_vec()))
        } else if opcode == self.reset {
            Ok(Command::Reset)
        } else {
            Err(Error::UnknownCommand(opcode))
        }
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            family_tag: REPEATED_MAGIC,
            set_pattern: SET_PATTERN,
            reset: RESET,
        }
    }
}
