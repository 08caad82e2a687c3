//! Shared named-variable store with literal/bound/dynamic binding cells.
//!
//! A [`Blackboard`] is an ordered mapping from unique names to typed
//! variables, scoped to whatever owns it (an agent, a graph). A [`Bind`]
//! cell makes a task field transparently either an inline literal or a
//! named lookup into a board, resolved lazily on every access, with an
//! explicit dynamic mode for runtime-computed values.
//!
//! Reads never fail: an unresolved binding is `None`. Only mutation
//! (duplicate declaration, cross-kind overwrite) surfaces a
//! [`BlackboardError`].

pub mod bind;
pub mod board;
pub mod error;
pub mod value;

pub use bind::{Bind, DYNAMIC_NAME, discover_names};
pub use board::{Blackboard, Entry};
pub use error::{BlackboardError, Result};
pub use value::{BlackboardValue, Value, ValueKind};
