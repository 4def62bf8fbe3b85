#[path = "../common/mod.rs"]
mod common;

use librepeated::device::RepeatingPatternDevice;
use librepeated::ioctl::{RESET, SET_PATTERN};
use librepeated::Error;

#[test]
fn closed_open_closed() {
    common::init_logging();
    let mut dev = RepeatingPatternDevice::new();
    assert!(matches!(dev.write(b"x"), Err(Error::DeviceNotOpen)));

    dev.open();
    assert!(dev.is_open());
    dev.ioctl(SET_PATTERN, common::fixtures::REFERENCE_PATTERN)
        .unwrap();
    dev.write(common::fixtures::REFERENCE_MESSAGE).unwrap();

    dev.close().unwrap();
    assert!(!dev.is_open());
    assert!(matches!(dev.read(7), Err(Error::DeviceNotOpen)));
    assert!(matches!(dev.ioctl(RESET, &[]), Err(Error::DeviceNotOpen)));
}

#[test]
fn operations_valid_in_any_order() {
    let mut dev = RepeatingPatternDevice::new();
    dev.open();
    // read before anything was written
    assert!(dev.read(10).unwrap().is_empty());
    dev.ioctl(RESET, &[]).unwrap();
    dev.write(&common::fixtures::filler(3)).unwrap();
    dev.ioctl(SET_PATTERN, b"z").unwrap();
    assert_eq!(dev.read(10).unwrap(), b"zzz");
    dev.ioctl(SET_PATTERN, b"").unwrap();
    dev.ioctl(SET_PATTERN, b"pq").unwrap();
    assert_eq!(dev.read(2).unwrap(), b"pq");
}

#[test]
fn unknown_control_call_is_rejected() {
    let mut dev = RepeatingPatternDevice::new();
    dev.open();
    let op = common::fixtures::unknown_opcode();
    match dev.ioctl(op, b"abc") {
        Err(Error::UnknownCommand(got)) => assert_eq!(got, op),
        other => panic!("expected unknown command, got: {:?}", other),
    }
}
