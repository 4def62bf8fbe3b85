//! Run the reference exercise against a device node.
//!
//! Usage:
//!   cargo run -p librepeated --example exercise --features chardev [-- /dev/repeated]
//!
//! Without the `chardev` feature (or with `--mock`) the exercise runs against
//! the in-process device model.

use anyhow::Context;
use librepeated::exerciser::{ExercisePlan, run_exercise};
use librepeated::session::SessionBuilder;
use librepeated::test_support::boxed_mock_with_device;
use librepeated::{RepeatingPatternDevice, SessionConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = SessionConfig::from_env()?;
    let mut use_mock = !cfg!(feature = "chardev");
    for arg in std::env::args().skip(1) {
        if arg == "--mock" {
            use_mock = true;
        } else {
            config = config.with_device_path(arg);
        }
    }

    let commands = config.command_set()?;
    println!(
        "family {:?}: SET_PATTERN={} RESET={}",
        commands.family_tag as char, commands.set_pattern, commands.reset
    );

    let mut builder = SessionBuilder::new().with_config(config.clone());
    if use_mock {
        builder = builder.with_transport(boxed_mock_with_device(
            RepeatingPatternDevice::with_commands(commands),
        ));
    }
    let mut session = builder
        .build()
        .with_context(|| format!("opening {}", config.device_path.display()))?;

    let plan = ExercisePlan::default();
    let report = run_exercise(&mut session, &plan)?;
    println!(
        "wrote {} bytes, requested {}, read {} ({})",
        report.written,
        report.requested,
        hex::encode(&report.output),
        String::from_utf8_lossy(&report.output)
    );
    session.close()?;
    Ok(())
}
