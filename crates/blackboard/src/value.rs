//! Tagged value model for blackboard variables.
//!
//! Variables hold one of a closed set of value types. The [`BlackboardValue`]
//! trait bridges concrete Rust types to the tagged [`Value`] representation,
//! so typed accessors (`get::<f64>`, `set::<String>`) never compare or
//! convert across kinds: a mismatched extraction is simply `None`.

use serde::{Deserialize, Serialize};

/// A variable value, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Vec3([f32; 3]),
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Vec3(_) => ValueKind::Vec3,
        }
    }
}

/// The kind of a [`Value`], without its payload.
///
/// Used for declaration-time typing, mismatch errors, and filtering name
/// discovery by variable type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    Vec3,
}

/// Bridge between a concrete Rust type and the tagged [`Value`] model.
///
/// Implementations are provided for the closed set of supported types.
/// `from_value` returns `None` when the tagged value holds a different kind;
/// it never converts.
pub trait BlackboardValue: Clone {
    /// The kind tag this type maps to.
    const KIND: ValueKind;

    /// Wraps this value into the tagged representation.
    fn into_value(self) -> Value;

    /// Extracts a typed copy from the tagged representation, or `None` on
    /// kind mismatch.
    fn from_value(value: &Value) -> Option<Self>;
}

impl BlackboardValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl BlackboardValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl BlackboardValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl BlackboardValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl BlackboardValue for [f32; 3] {
    const KIND: ValueKind = ValueKind::Vec3;

    fn into_value(self) -> Value {
        Value::Vec3(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Vec3(v) => Some(*v),
            _ => None,
        }
    }
}
