//! Status returned by task and node ticks.

use serde::{Deserialize, Serialize};

/// The result of ticking a task or node.
///
/// A tick either completes synchronously (`Success`/`Failure`), stays
/// in-flight across ticks (`Running`), or has nothing to report (`Resting`,
/// the state before any execution and after a terminal outcome has been
/// consumed).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Status {
    /// Not executing: initial state, and the state re-entered once a
    /// terminal outcome has been reported.
    Resting,

    /// In-flight; the scheduler will tick again next frame-equivalent.
    Running,

    /// The task completed and succeeded.
    Success,

    /// The task completed and failed.
    Failure,
}

impl Status {
    /// Maps a boolean outcome to its terminal status.
    #[inline]
    pub fn from_bool(success: bool) -> Self {
        if success { Status::Success } else { Status::Failure }
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is a completed outcome.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Swaps Success and Failure; Resting and Running pass through.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Resting
    }
}
