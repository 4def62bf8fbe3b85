// librepeated/src/config.rs
//! Session configuration: which node to open and which family tag both sides
//! derive their opcodes from.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DEVICE_PATH, ENV_DEVICE_PATH, ENV_FAMILY_TAG, REPEATED_MAGIC};
use crate::ioctl::CommandSet;
use crate::{Error, Result};

/// Where a session opens its device and which family tag it speaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Device node to open
    pub device_path: PathBuf,
    /// Family tag both sides derive opcodes from
    pub family_tag: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            device_path: PathBuf::from(DEFAULT_DEVICE_PATH),
            family_tag: REPEATED_MAGIC,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `REPEATED_DEVICE` and `REPEATED_FAMILY_TAG`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(path) = env::var(ENV_DEVICE_PATH) {
            config.device_path = PathBuf::from(path);
        }
        if let Ok(tag) = env::var(ENV_FAMILY_TAG) {
            config.family_tag = parse_family_tag(&tag)?;
        }
        Ok(config)
    }

    /// Override the device node path.
    pub fn with_device_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.device_path = path.into();
        self
    }

    /// Override the family tag.
    pub fn with_family_tag(mut self, family_tag: u8) -> Self {
        self.family_tag = family_tag;
        self
    }

    /// Opcodes derived from `family_tag`.
    pub fn command_set(&self) -> Result<CommandSet> {
        CommandSet::for_family(self.family_tag)
    }
}

/// Accepts a single ASCII character (`r`), a decimal number (`114`) or a
/// hex number (`0x72`).
pub fn parse_family_tag(s: &str) -> Result<u8> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if s.len() == 1 && !s.as_bytes()[0].is_ascii_digit() {
        Some(u32::from(s.as_bytes()[0]))
    } else {
        s.parse::<u32>().ok()
    };
    let value = parsed.ok_or_else(|| Error::InvalidConfig(format!("bad family tag {:?}", s)))?;
    u8::try_from(value).map_err(|_| Error::InvalidDescriptor {
        field: "family_tag",
        value,
        max: 0xff,
    })
}
