// librepeated/src/transport/chardev.rs

#![cfg(feature = "chardev")]

use std::ffi::CString;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use log::debug;
use nix::errno::Errno;
use nix::libc;

use crate::constants::MAX_READ_CHUNK;
use crate::transport::traits::Transport;
use crate::types::Opcode;
use crate::{Error, Result};

/// Transport over a real character device node (e.g. `/dev/repeated`).
///
/// Payload-carrying control calls pass their argument as a NUL-terminated
/// string pointer; the driver measures it with `strlen_user`. Bulk calls
/// are single `read(2)` / `write(2)` calls and report what the driver
/// returned.
pub struct ChardevTransport {
    path: PathBuf,
    file: Option<File>,
}

impl ChardevTransport {
    /// Open the node read/write. A missing node maps to `DeviceNotFound`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::DeviceNotFound,
                _ => Error::Io(e),
            })?;
        debug!("opened {}", path.display());
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    fn file(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(Error::DeviceNotOpen)
    }
}

impl Transport for ChardevTransport {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ioctl(&mut self, opcode: Opcode, arg: &[u8]) -> Result<()> {
        let fd = self.file()?.as_raw_fd();
        let res = if opcode.direction().has_payload() {
            let c_arg = CString::new(arg)
                .map_err(|e| Error::InvalidPayload(format!("interior NUL at {}", e.nul_position())))?;
            // SAFETY: fd is open for the lifetime of self.file and c_arg
            // outlives the call.
            unsafe { libc::ioctl(fd, opcode.as_u32() as _, c_arg.as_ptr()) }
        } else {
            // SAFETY: fd is open; the driver ignores the argument.
            unsafe { libc::ioctl(fd, opcode.as_u32() as _, 0 as libc::c_ulong) }
        };
        Errno::result(res)?;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Ok(self.file()?.write(data)?)
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        // one read(2) never returns more than a chunk; callers get a short read
        let mut buf = vec![0u8; max_len.min(MAX_READ_CHUNK)];
        let n = self.file()?.read(&mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn close(&mut self) -> Result<()> {
        // dropping the File closes the descriptor
        self.file.take().ok_or(Error::DeviceNotOpen)?;
        debug!("closed {}", self.path.display());
        Ok(())
    }
}
