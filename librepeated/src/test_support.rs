//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::config::SessionConfig;
use crate::constants::DEFAULT_DEVICE_PATH;
use crate::device::RepeatingPatternDevice;
use crate::session::Session;
use crate::transport::{MockTransport, Transport};
use crate::Result;

/// Build a MockTransport around `device` and return it boxed as a Transport
/// trait object.
#[doc(hidden)]
pub fn boxed_mock_with_device(device: RepeatingPatternDevice) -> Box<dyn Transport> {
    Box::new(MockTransport::with_device(DEFAULT_DEVICE_PATH, device))
}

/// Convenience: a Session with the default configuration backed by a fresh
/// reference device.
#[doc(hidden)]
pub fn mock_session() -> Result<Session> {
    let boxed = boxed_mock_with_device(RepeatingPatternDevice::new());
    Session::new_with_transport(boxed, &SessionConfig::default())
}

/// Open a mock session, set `pattern` and write `written` filler bytes.
#[doc(hidden)]
pub fn mock_session_with_pending(pattern: &[u8], written: usize) -> Result<Session> {
    let mut session = mock_session()?;
    session.set_pattern(pattern)?;
    session.write(&vec![0u8; written])?;
    Ok(session)
}
