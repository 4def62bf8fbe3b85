#[path = "../common/mod.rs"]
mod common;

use librepeated::device::RepeatingPatternDevice;
use librepeated::exerciser::{ExercisePlan, run_exercise};
use librepeated::ioctl::CommandSet;
use librepeated::session::SessionBuilder;
use librepeated::test_support::boxed_mock_with_device;
use librepeated::{Error, SessionConfig};

#[test]
fn reference_exercise_passes() {
    common::init_logging();
    let mut session = common::mock_session().unwrap();
    let report = run_exercise(&mut session, &ExercisePlan::default()).unwrap();
    assert_eq!(report.output, common::fixtures::REFERENCE_OUTPUT);
    session.close().unwrap();
}

#[test]
fn exercise_with_longer_message() {
    let mut session = common::mock_session().unwrap();
    let plan = ExercisePlan {
        pattern: b"0123".to_vec(),
        message: common::fixtures::filler(10),
        read_slack: 0,
    };
    let report = run_exercise(&mut session, &plan).unwrap();
    assert_eq!(report.output, b"0123012301");
}

#[test]
fn session_reads_are_idempotent() {
    let mut session = common::mock_session_with_pending(b"ab", 5).unwrap();
    let a = session.read(5).unwrap();
    let b = session.read(5).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, b"ababa");
}

#[test]
fn reset_then_read_fails() {
    let mut session = common::mock_session_with_pending(b"ab", 5).unwrap();
    session.reset().unwrap();
    assert!(matches!(session.read(5), Err(Error::EmptyPattern)));
}

#[test]
fn builder_with_matching_family() {
    let config = SessionConfig::default().with_family_tag(b'k');
    let device = RepeatingPatternDevice::with_commands(CommandSet::for_family(b'k').unwrap());
    let mut session = SessionBuilder::new()
        .with_config(config)
        .with_transport(boxed_mock_with_device(device))
        .build()
        .unwrap();
    run_exercise(&mut session, &ExercisePlan::default()).unwrap();
}
