// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

pub use librepeated::test_support::{mock_session, mock_session_with_pending};

/// Route `log` output through env_logger; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
