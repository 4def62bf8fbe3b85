// librepeated/src/device/state.rs

use log::trace;

use crate::{Error, Result};

/// Per-session state of the repeating-pattern device.
///
/// Writes are accounting operations: only the length of the last write is
/// kept, never its bytes. Reads tile `pattern` up to that length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceState {
    pattern: Vec<u8>,
    pending_length: usize,
    position: usize,
}

impl DeviceState {
    /// Empty pattern, nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pattern.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Length of the last write.
    pub fn pending_length(&self) -> usize {
        self.pending_length
    }

    /// Cursor used by `read_at_cursor` and `seek`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Replace the pattern; the pending length is kept.
    pub fn set_pattern(&mut self, pattern: &[u8]) {
        trace!("set_pattern: {} bytes", pattern.len());
        self.pattern = pattern.to_vec();
    }

    /// Clear the pattern; the pending length is kept.
    pub fn reset(&mut self) {
        trace!("reset");
        self.pattern.clear();
    }

    /// Record the length of `buf` and return it as the accepted count.
    pub fn write(&mut self, buf: &[u8]) -> usize {
        trace!("write: {} bytes", buf.len());
        self.pending_length = buf.len();
        self.position = 0;
        self.pending_length
    }

    /// Produce `min(max_len, pending_length)` bytes of the tiled pattern.
    /// Repeated calls return the same bytes.
    pub fn read(&self, max_len: usize) -> Result<Vec<u8>> {
        let n = max_len.min(self.pending_length);
        trace!("read: max_len={} produced={}", max_len, n);
        self.tile(0, n)
    }

    /// Like `read`, but starts at the cursor and advances it.
    pub fn read_at_cursor(&mut self, max_len: usize) -> Result<Vec<u8>> {
        let remaining = self.pending_length.saturating_sub(self.position);
        let n = max_len.min(remaining);
        let out = self.tile(self.position, n)?;
        self.position += n;
        trace!("read_at_cursor: produced={} position={}", n, self.position);
        Ok(out)
    }

    /// Move the cursor by `delta`, clamped to `0..=pending_length`.
    pub fn seek(&mut self, delta: i64) -> usize {
        let target = (self.position as i64).saturating_add(delta);
        self.position = target.clamp(0, self.pending_length as i64) as usize;
        trace!("seek: delta={} position={}", delta, self.position);
        self.position
    }

    fn tile(&self, offset: usize, n: usize) -> Result<Vec<u8>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        if self.pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        let start = offset % self.pattern.len();
        Ok(self
            .pattern
            .iter()
            .cycle()
            .skip(start)
            .take(n)
            .copied()
            .collect())
    }
}
