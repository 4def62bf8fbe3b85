// librepeated/src/exerciser.rs
//! End-to-end check of a device: configure a pattern, write a message whose
//! content the device ignores, read back more than was written and compare
//! against the pattern tiled to the message length.

use log::{debug, info};

use crate::session::Session;
use crate::{Error, Result};

/// Inputs of one exercise run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePlan {
    /// Pattern configured through the set-pattern control call
    pub pattern: Vec<u8>,
    /// Bytes written; only their count matters to the device
    pub message: Vec<u8>,
    /// Extra bytes requested beyond the message length
    pub read_slack: usize,
}

impl Default for ExercisePlan {
    fn default() -> Self {
        Self {
            pattern: b"abc".to_vec(),
            message: b"ignored".to_vec(),
            read_slack: 10,
        }
    }
}

impl ExercisePlan {
    /// `pattern` repeated and truncated to the message length.
    pub fn expected_output(&self) -> Vec<u8> {
        if self.pattern.is_empty() {
            return Vec::new();
        }
        self.pattern
            .iter()
            .cycle()
            .take(self.message.len())
            .copied()
            .collect()
    }
}

/// Outcome of a successful exercise run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseReport {
    /// Count the device reported as accepted
    pub written: usize,
    /// Length asked of the read
    pub requested: usize,
    /// Bytes the device produced
    pub output: Vec<u8>,
}

/// Run `plan` against `session`, failing with `PatternMismatch` when the
/// device output differs from the expectation.
pub fn run_exercise(session: &mut Session, plan: &ExercisePlan) -> Result<ExerciseReport> {
    session.set_pattern(&plan.pattern)?;
    let written = session.write(&plan.message)?;
    debug!("wrote {} of {} bytes", written, plan.message.len());

    let requested = plan.message.len() + plan.read_slack;
    let output = session.read(requested)?;

    let expected = plan.expected_output();
    if output != expected {
        return Err(Error::PatternMismatch {
            expected,
            actual: output,
        });
    }
    info!(
        "{}: {} bytes of pattern verified",
        session.path().display(),
        output.len()
    );
    Ok(ExerciseReport {
        written,
        requested,
        output,
    })
}
