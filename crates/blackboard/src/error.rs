//! Errors raised by blackboard mutation.
//!
//! Reads never error: a missing name or kind mismatch on lookup surfaces as
//! `None` so callers treat unresolved bindings as "no value".

use thiserror::Error;

use crate::value::ValueKind;

/// Errors surfaced when declaring or writing variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlackboardError {
    #[error("variable '{0}' is already declared")]
    DuplicateName(String),

    #[error("variable '{name}' holds {found}, cannot write {expected}")]
    KindMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

pub type Result<T> = std::result::Result<T, BlackboardError>;
