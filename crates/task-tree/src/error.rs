//! Errors raised by task setup.
//!
//! Execution itself never errors: per-task failures are expressed purely
//! through the [`Status`](crate::Status) value propagated up composite
//! aggregation. Only binding the agent/blackboard pair during setup has an
//! error channel, and a failed setup simply forces that execution to
//! `Failure`.

use thiserror::Error;

/// Agent/blackboard binding could not be established for a task.
#[derive(Debug, Error)]
#[error("task setup failed: {reason}")]
pub struct SetupError {
    reason: String,
}

impl SetupError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<blackboard::BlackboardError> for SetupError {
    fn from(err: blackboard::BlackboardError) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}
