#[path = "../common/mod.rs"]
mod common;

use librepeated::ioctl::{CommandSet, SET_PATTERN};
use librepeated::transport::{MockTransport, Transport, TransportCall};

#[test]
fn mock_transport_forwards_to_device() {
    let mut m = MockTransport::open("/dev/repeated");
    m.ioctl(SET_PATTERN, common::fixtures::REFERENCE_PATTERN)
        .unwrap();
    assert_eq!(m.write(common::fixtures::REFERENCE_MESSAGE).unwrap(), 7);
    assert_eq!(m.read(17).unwrap(), common::fixtures::REFERENCE_OUTPUT);
    assert_eq!(m.calls.len(), 3);
}

#[test]
fn write_payload_is_recorded_but_not_stored() {
    let mut m = MockTransport::open("/dev/repeated");
    m.write(b"secret").unwrap();
    assert_eq!(m.calls, vec![TransportCall::Write(b"secret".to_vec())]);
    let state = m.device.state().unwrap();
    assert_eq!(state.pending_length(), 6);
    assert!(state.pattern().is_empty());
}

#[test]
fn control_reaches_device_with_custom_family() {
    let set = CommandSet::for_family(b'x').unwrap();
    let device = librepeated::device::RepeatingPatternDevice::with_commands(set);
    let mut m = MockTransport::with_device("/dev/repeated1", device);
    m.ioctl(set.set_pattern, b"12").unwrap();
    assert_eq!(m.device.state().unwrap().pattern(), b"12");
}
