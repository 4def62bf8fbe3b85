// librepeated/src/transport/mock.rs

use std::io;
use std::path::{Path, PathBuf};

use crate::device::RepeatingPatternDevice;
use crate::transport::traits::Transport;
use crate::types::Opcode;
use crate::{Error, Result};

/// One call observed by `MockTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    /// Control call
    Ioctl {
        /// Opcode sent
        opcode: Opcode,
        /// Payload sent alongside
        arg: Vec<u8>,
    },
    /// Bulk write with the bytes sent
    Write(Vec<u8>),
    /// Bulk read with the requested length
    Read(usize),
    /// Close
    Close,
}

/// In-process transport for tests. It forwards every call to an owned
/// `RepeatingPatternDevice` and records what the caller sent.
#[derive(Debug)]
pub struct MockTransport {
    /// Path given at open
    pub path: PathBuf,
    /// Device the calls are forwarded to
    pub device: RepeatingPatternDevice,
    /// Every call received, in order
    pub calls: Vec<TransportCall>,
    /// Testing hook: number of upcoming calls that should fail with an I/O error
    pub io_failures: usize,
}

impl MockTransport {
    /// Open a fresh reference device under `path`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_device(path, RepeatingPatternDevice::new())
    }

    /// Open `device` under `path`.
    pub fn with_device(path: impl AsRef<Path>, mut device: RepeatingPatternDevice) -> Self {
        device.open();
        Self {
            path: path.as_ref().to_path_buf(),
            device,
            calls: Vec::new(),
            io_failures: 0,
        }
    }

    /// Set how many subsequent calls should fail (for tests).
    pub fn set_io_failures(&mut self, n: usize) {
        self.io_failures = n;
    }

    fn record(&mut self, call: TransportCall) -> Result<()> {
        self.calls.push(call);
        if self.io_failures > 0 {
            self.io_failures -= 1;
            return Err(Error::Io(io::Error::other("injected transport failure")));
        }
        Ok(())
    }
}

impl Transport for MockTransport {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ioctl(&mut self, opcode: Opcode, arg: &[u8]) -> Result<()> {
        self.record(TransportCall::Ioctl {
            opcode,
            arg: arg.to_vec(),
        })?;
        self.device.ioctl(opcode, arg)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.record(TransportCall::Write(data.to_vec()))?;
        self.device.write(data)
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.record(TransportCall::Read(max_len))?;
        self.device.read(max_len)
    }

    fn close(&mut self) -> Result<()> {
        self.record(TransportCall::Close)?;
        self.device.close()
    }
}
