//! The blackboard: an ordered, named variable store.
//!
//! A blackboard is owned by whatever created it (an agent, a graph) and is
//! mutated by whichever task writes a bound variable. Everything runs on one
//! logical thread, so writes take effect immediately and are visible to
//! subsequent reads within the same tick.

use serde::{Deserialize, Serialize};

use crate::error::{BlackboardError, Result};
use crate::value::{BlackboardValue, Value, ValueKind};

/// A single named variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub value: Value,
}

/// Ordered mapping from unique name to typed variable.
///
/// Declaration order is preserved (it is the order an authoring UI lists
/// variables in). Boards are authoring-scale, so lookup is a linear scan
/// over the entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blackboard {
    name: String,
    global: bool,
    entries: Vec<Entry>,
}

impl Blackboard {
    /// Creates an empty board. `name` identifies it when entries are
    /// discovered from other boards.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            global: false,
            entries: Vec::new(),
        }
    }

    /// The board's identifier, used as a prefix in cross-board discovery.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this board's entries are discoverable from other boards'
    /// binding UIs.
    pub fn is_global(&self) -> bool {
        self.global
    }

    pub fn set_global(&mut self, global: bool) {
        self.global = global;
    }

    /// Declares a new variable. Names are unique per board.
    pub fn declare<T: BlackboardValue>(&mut self, name: impl Into<String>, value: T) -> Result<()> {
        let name = name.into();
        if self.entry(&name).is_some() {
            return Err(BlackboardError::DuplicateName(name));
        }
        tracing::debug!(board = %self.name, %name, kind = %T::KIND, "declared variable");
        self.entries.push(Entry {
            name,
            value: value.into_value(),
        });
        Ok(())
    }

    /// Reads a variable by name.
    ///
    /// Returns `None` when the name is not declared or holds a different
    /// kind; an unresolved binding is "no value", never an error.
    pub fn get<T: BlackboardValue>(&self, name: &str) -> Option<T> {
        self.entry(name).and_then(|e| T::from_value(&e.value))
    }

    /// Writes a variable by name, declaring it if absent.
    ///
    /// Overwriting an existing variable of a different kind is an error;
    /// the store never converts across kinds.
    pub fn set<T: BlackboardValue>(&mut self, name: &str, value: T) -> Result<()> {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                let found = entry.value.kind();
                if found != T::KIND {
                    return Err(BlackboardError::KindMismatch {
                        name: name.to_string(),
                        expected: T::KIND,
                        found,
                    });
                }
                entry.value = value.into_value();
                Ok(())
            }
            None => {
                self.entries.push(Entry {
                    name: name.to_string(),
                    value: value.into_value(),
                });
                Ok(())
            }
        }
    }

    /// Removes a variable. Returns the removed value, if any.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx).value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// The kind of a declared variable, if present.
    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.entry(name).map(|e| e.value.kind())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All declared names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Names of all variables of the given kind, in declaration order.
    pub fn names_of_kind(&self, kind: ValueKind) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |e| e.value.kind() == kind)
            .map(|e| e.name.as_str())
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
