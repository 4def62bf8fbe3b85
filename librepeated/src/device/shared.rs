// librepeated/src/device/shared.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::device::handle::RepeatingPatternDevice;
use crate::ioctl::Command;
use crate::types::Opcode;
use crate::{Error, Result};

/// Cloneable handle serializing access to one device from several callers.
#[derive(Debug, Clone, Default)]
pub struct SharedDevice {
    inner: Arc<Mutex<RepeatingPatternDevice>>,
}

impl SharedDevice {
    /// Take ownership of `device`.
    pub fn new(device: RepeatingPatternDevice) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Run `f` with exclusive access to the device.
    pub fn with<T>(&self, f: impl FnOnce(&mut RepeatingPatternDevice) -> Result<T>) -> Result<T> {
        let mut guard = self.lock()?;
        f(&mut guard)
    }

    fn lock(&self) -> Result<MutexGuard<'_, RepeatingPatternDevice>> {
        self.inner.lock().map_err(|_| Error::LockPoisoned)
    }

    /// See `RepeatingPatternDevice::open`.
    pub fn open(&self) -> Result<()> {
        self.lock()?.open();
        Ok(())
    }

    /// See `RepeatingPatternDevice::close`.
    pub fn close(&self) -> Result<()> {
        self.lock()?.close()
    }

    /// See `RepeatingPatternDevice::is_open`.
    pub fn is_open(&self) -> Result<bool> {
        Ok(self.lock()?.is_open())
    }

    /// See `RepeatingPatternDevice::execute`.
    pub fn execute(&self, cmd: &Command) -> Result<()> {
        self.lock()?.execute(cmd)
    }

    /// See `RepeatingPatternDevice::ioctl`.
    pub fn ioctl(&self, opcode: Opcode, arg: &[u8]) -> Result<()> {
        self.lock()?.ioctl(opcode, arg)
    }

    /// See `RepeatingPatternDevice::set_pattern`.
    pub fn set_pattern(&self, pattern: &[u8]) -> Result<()> {
        self.lock()?.set_pattern(pattern)
    }

    /// See `RepeatingPatternDevice::reset`.
    pub fn reset(&self) -> Result<()> {
        self.lock()?.reset()
    }

    /// See `RepeatingPatternDevice::write`.
    pub fn write(&self, buf: &[u8]) -> Result<usize> {
        self.lock()?.write(buf)
    }

    /// See `RepeatingPatternDevice::read`.
    pub fn read(&self, max_len: usize) -> Result<Vec<u8>> {
        self.lock()?.read(max_len)
    }

    /// Cursor read; concurrent callers each receive a disjoint slice.
    pub fn read_at_cursor(&self, max_len: usize) -> Result<Vec<u8>> {
        self.lock()?.read_at_cursor(max_len)
    }

    /// See `RepeatingPatternDevice::seek`.
    pub fn seek(&self, delta: i64) -> Result<usize> {
        self.lock()?.seek(delta)
    }
}
