//! Tick-driven task execution runtime with blackboard binding.
//!
//! Tasks are the atomic units of behavior, evaluated against a
//! caller-supplied agent and a [`blackboard::Blackboard`] variable store.
//! A driving scheduler (external to this crate) ticks the tree once per
//! frame-equivalent; each tick either completes synchronously or leaves
//! tasks `Running` across ticks. Everything is single-threaded and
//! cooperative: "parallel" lists are same-tick fan-out, and cancellation
//! propagates synchronously down the child chain.
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes, generic over the agent type
//! - [`Status`]: Resting / Running / Success / Failure
//! - Leaves: [`ActionRunner`] (multi-tick work with an explicit completion),
//!   [`ConditionRunner`] (synchronous boolean checks, invertible, with a
//!   one-shot yield override for event-driven checks)
//! - Composites: [`ActionList`] (sequential or parallel), [`Sequence`],
//!   [`Selector`]
//! - Decorators: [`Gate`] (conditional access, dynamic or latched),
//!   [`Inverter`]
//!
//! Failures are plain status values flowing up the aggregation rules;
//! there is no exception-style control flow in the execution path.

pub mod action;
pub mod action_list;
pub mod builder;
pub mod composite;
pub mod condition;
pub mod decorator;
pub mod error;
pub mod gate;
pub mod status;
pub mod task;

// Re-export core types for ergonomic API
pub use action::{Action, ActionRunner, ActionScope};
pub use action_list::ActionList;
pub use composite::{Selector, Sequence};
pub use condition::{Condition, ConditionRunner};
pub use decorator::Inverter;
pub use error::SetupError;
pub use gate::Gate;
pub use status::Status;
pub use task::{Behavior, Ctx, TaskState};
