#[path = "../common/mod.rs"]
mod common;

use librepeated::device::DeviceState;
use librepeated::Error;

fn state_with(pattern: &[u8], written: usize) -> DeviceState {
    let mut s = DeviceState::new();
    s.set_pattern(pattern);
    s.write(&common::fixtures::filler(written));
    s
}

#[test]
fn reference_scenario_abc_seven() {
    let mut s = DeviceState::new();
    s.set_pattern(common::fixtures::REFERENCE_PATTERN);
    assert_eq!(s.write(common::fixtures::REFERENCE_MESSAGE), 7);
    assert_eq!(s.read(17).unwrap(), common::fixtures::REFERENCE_OUTPUT);
}

#[test]
fn short_read_truncates_to_request() {
    let s = state_with(b"abc", 7);
    assert_eq!(s.read(4).unwrap(), b"abca");
}

#[test]
fn repeated_reads_are_identical() {
    let s = state_with(b"hello", 12);
    let first = s.read(12).unwrap();
    let second = s.read(12).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, b"hellohellohe");
}

#[test]
fn read_zero_always_empty() {
    assert!(DeviceState::new().read(0).unwrap().is_empty());
    assert!(state_with(b"", 5).read(0).unwrap().is_empty());
    assert!(state_with(b"ab", 5).read(0).unwrap().is_empty());
}

#[test]
fn cleared_pattern_with_pending_bytes() {
    let mut s = state_with(b"abc", 4);
    s.set_pattern(b"");
    assert!(matches!(s.read(4), Err(Error::EmptyPattern)));
}

#[test]
fn later_write_replaces_pending_length() {
    let mut s = state_with(b"ab", 10);
    s.write(&common::fixtures::filler(3));
    assert_eq!(s.read(100).unwrap(), b"aba");
}

#[test]
fn pattern_longer_than_pending() {
    let s = state_with(b"0123456789", 4);
    assert_eq!(s.read(100).unwrap(), b"0123");
}
