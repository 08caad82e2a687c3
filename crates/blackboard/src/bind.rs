//! Binding cells: fields that are either a literal or a named lookup.
//!
//! A [`Bind`] makes a declared field transparently one of three things,
//! resolved at read/write time:
//!
//! - **Literal**: the value lives in the cell itself. Reads never touch a
//!   blackboard, even if a variable of the same name exists somewhere.
//! - **Named**: the value lives in a blackboard under a name; every access
//!   is a lookup. An empty or undeclared name reads as `None`.
//! - **Dynamic**: the value is computed at runtime by an accessor the owning
//!   task supplies; the cell only marks the intent.
//!
//! Exactly one mode is active at a time, and switching modes preserves no
//! value continuity. Both invariants are structural here: the cell is an
//! enum.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Blackboard;
use crate::error::Result;
use crate::value::{BlackboardValue, ValueKind};

/// Sentinel selection marking a cell for runtime-supplied resolution.
pub const DYNAMIC_NAME: &str = "[dynamic]";

/// A typed reference cell: literal value, named blackboard slot, or
/// dynamic marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Bind<T: BlackboardValue> {
    /// Inline value, read and written without any lookup.
    Literal(T),
    /// Named slot resolved against a blackboard on each access.
    Named(String),
    /// Resolved through a runtime-supplied accessor, not static storage.
    Dynamic,
}

impl<T: BlackboardValue> Bind<T> {
    /// Creates a cell bound to the given variable name.
    pub fn named(name: impl Into<String>) -> Self {
        Bind::Named(name.into())
    }

    /// Maps an authoring-time selection back to a cell mode.
    ///
    /// The [`DYNAMIC_NAME`] sentinel selects dynamic resolution; anything
    /// else becomes a named binding.
    pub fn from_selection(selection: &str) -> Self {
        if selection == DYNAMIC_NAME {
            Bind::Dynamic
        } else {
            Bind::Named(selection.to_string())
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Bind::Literal(_))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Bind::Dynamic)
    }

    /// The bound name, if this cell is in named mode.
    pub fn name(&self) -> Option<&str> {
        match self {
            Bind::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Reads the cell's value.
    ///
    /// Literal mode returns the stored value without touching the board.
    /// Named mode looks the name up; a missing or empty name is `None`.
    /// Dynamic mode is `None` here, see [`Bind::get_dynamic`].
    pub fn get(&self, board: &Blackboard) -> Option<T> {
        match self {
            Bind::Literal(value) => Some(value.clone()),
            Bind::Named(name) => {
                if name.is_empty() {
                    None
                } else {
                    board.get::<T>(name)
                }
            }
            Bind::Dynamic => None,
        }
    }

    /// Reads the cell's value, routing dynamic mode through `supplier`.
    ///
    /// The read contract is identical to [`Bind::get`] for the other two
    /// modes; only where the value comes from differs.
    pub fn get_dynamic(
        &self,
        board: &Blackboard,
        supplier: impl FnOnce() -> Option<T>,
    ) -> Option<T> {
        match self {
            Bind::Dynamic => supplier(),
            _ => self.get(board),
        }
    }

    /// Writes through the cell.
    ///
    /// Literal mode replaces the stored value; named mode upserts the board
    /// slot (declaring it if absent). A dynamic cell has no storage, the
    /// write is dropped.
    pub fn set(&mut self, board: &mut Blackboard, value: T) -> Result<()> {
        match self {
            Bind::Literal(stored) => {
                *stored = value;
                Ok(())
            }
            Bind::Named(name) => board.set(name, value),
            Bind::Dynamic => {
                tracing::warn!("write through a dynamic cell was dropped");
                Ok(())
            }
        }
    }
}

impl<T: BlackboardValue + Default> Default for Bind<T> {
    fn default() -> Self {
        Bind::Literal(T::default())
    }
}

impl<T: BlackboardValue + fmt::Debug> fmt::Display for Bind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bind::Literal(value) => write!(f, "{value:?}"),
            Bind::Named(name) => write!(f, "${name}"),
            Bind::Dynamic => write!(f, "{DYNAMIC_NAME}"),
        }
    }
}

/// Enumerates selectable names of `kind` for a cell living on `local`.
///
/// Order: local names first, then names from every *other* linked board
/// flagged global, prefixed `"<board>/<name>"` to disambiguate, then the
/// [`DYNAMIC_NAME`] sentinel. Duplicates across boards resolve by first
/// match; there is no shadowing beyond the prefix.
pub fn discover_names(local: &Blackboard, linked: &[&Blackboard], kind: ValueKind) -> Vec<String> {
    let mut names: Vec<String> = local.names_of_kind(kind).map(str::to_string).collect();
    for board in linked {
        if std::ptr::eq(*board, local) || !board.is_global() {
            continue;
        }
        for name in board.names_of_kind(kind) {
            names.push(format!("{}/{}", board.name(), name));
        }
    }
    names.push(DYNAMIC_NAME.to_string());
    names
}
