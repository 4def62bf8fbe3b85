use librepeated::Error;
use librepeated::ioctl::RESET;
use librepeated::transport::{MockTransport, Transport};

#[test]
fn io_failure_and_recovery() {
    let mut m = MockTransport::open("/dev/repeated");
    m.set_io_failures(1);

    // First call fails (simulated) without touching the device
    assert!(matches!(m.ioctl(RESET, &[]), Err(Error::Io(_))));

    // Second call goes through
    m.ioctl(RESET, &[]).unwrap();
    assert_eq!(m.calls.len(), 2);
}

#[test]
fn closed_transport_reports_device_not_open() {
    let mut m = MockTransport::open("/dev/repeated");
    m.close().unwrap();
    assert!(matches!(m.read(1), Err(Error::DeviceNotOpen)));
    assert!(matches!(m.close(), Err(Error::DeviceNotOpen)));
}
