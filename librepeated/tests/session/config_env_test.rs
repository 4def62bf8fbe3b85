use std::env;
use std::path::PathBuf;

use serial_test::serial;

use librepeated::constants::{ENV_DEVICE_PATH, ENV_FAMILY_TAG};
use librepeated::{Error, SessionConfig};

fn clear_env() {
    // SAFETY: tests touching the environment are serialized
    unsafe {
        env::remove_var(ENV_DEVICE_PATH);
        env::remove_var(ENV_FAMILY_TAG);
    }
}

#[test]
#[serial]
fn from_env_defaults() {
    clear_env();
    assert_eq!(SessionConfig::from_env().unwrap(), SessionConfig::default());
}

#[test]
#[serial]
fn from_env_overrides() {
    clear_env();
    unsafe {
        env::set_var(ENV_DEVICE_PATH, "/dev/repeated3");
        env::set_var(ENV_FAMILY_TAG, "0x71");
    }
    let config = SessionConfig::from_env().unwrap();
    assert_eq!(config.device_path, PathBuf::from("/dev/repeated3"));
    assert_eq!(config.family_tag, b'q');
    clear_env();
}

#[test]
#[serial]
fn from_env_rejects_wide_tag() {
    clear_env();
    unsafe {
        env::set_var(ENV_FAMILY_TAG, "300");
    }
    assert!(matches!(
        SessionConfig::from_env(),
        Err(Error::InvalidDescriptor { .. })
    ));
    clear_env();
}

#[test]
#[serial]
fn from_env_rejects_malformed_tag() {
    clear_env();
    unsafe {
        env::set_var(ENV_FAMILY_TAG, "rr");
    }
    match SessionConfig::from_env() {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("rr")),
        other => panic!("expected invalid configuration, got: {:?}", other),
    }
    clear_env();
}
