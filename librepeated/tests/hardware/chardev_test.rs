#![cfg(feature = "chardev")]

#[path = "common.rs"]
mod common;

use librepeated::Result;
use librepeated::exerciser::{ExercisePlan, run_exercise};

// These tests require the repeated driver loaded with a node at
// /dev/repeated (or $REPEATED_DEVICE). They are `#[ignore]`d so CI does not
// attempt to run them. Run manually with:
//
// cargo test -p librepeated --test hardware --features chardev -- --ignored

#[test]
#[ignore]
fn reference_exercise_on_driver() -> Result<()> {
    match common::open_session()? {
        Some(mut session) => {
            run_exercise(&mut session, &ExercisePlan::default())?;
            session.close()
        }
        None => Ok(()),
    }
}

#[test]
#[ignore]
fn reset_on_driver() -> Result<()> {
    match common::open_session()? {
        Some(mut session) => {
            session.set_pattern(b"xyz")?;
            session.reset()?;
            session.close()
        }
        None => Ok(()),
    }
}
