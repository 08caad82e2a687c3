//! Conditional gate: execute the child subtree only while access is granted.
//!
//! A [`Gate`] wraps a single child behind an optional [`ConditionRunner`],
//! in one of two evaluation modes:
//!
//! - **dynamic**: the condition is re-evaluated on every tick, even while
//!   the child is running. The moment it turns false the child is aborted
//!   and the gate fails that same tick.
//! - **latch** (default): the condition is evaluated only while the gate is
//!   not already running. Once it grants access, the grant is sticky: the
//!   gate keeps delegating regardless of the condition's current value
//!   until [`Gate::reset`] clears it (on tree restart, never per tick).

use crate::Status;
use crate::condition::ConditionRunner;
use crate::task::{Behavior, Ctx, TaskState};

/// Gates a child subtree's execution behind a condition.
pub struct Gate<A> {
    state: TaskState,
    dynamic: bool,
    accessed: bool,
    condition: Option<ConditionRunner<A>>,
    child: Option<Box<dyn Behavior<A>>>,
}

impl<A> Gate<A> {
    /// Creates a gate with no condition and no child. Without a child the
    /// gate reports `Resting`; without a condition it delegates
    /// transparently.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: TaskState::new(name),
            dynamic: false,
            accessed: false,
            condition: None,
            child: None,
        }
    }

    pub fn with_child(mut self, child: Box<dyn Behavior<A>>) -> Self {
        self.child = Some(child);
        self
    }

    pub fn with_condition(mut self, condition: ConditionRunner<A>) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Switches to per-tick re-evaluation.
    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Whether latch mode has granted access in the current run.
    pub fn is_accessed(&self) -> bool {
        self.accessed
    }

    pub fn set_child(&mut self, child: Box<dyn Behavior<A>>) {
        self.child = Some(child);
    }

    pub fn set_condition(&mut self, condition: Option<ConditionRunner<A>>) {
        self.condition = condition;
    }

    fn tick_inner(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        let Some(child) = self.child.as_mut() else {
            return Status::Resting;
        };
        let Some(condition) = self.condition.as_mut() else {
            return child.tick(ctx);
        };

        if self.dynamic {
            if condition.check_condition(ctx) {
                child.tick(ctx)
            } else {
                if self.state.status().is_running() {
                    tracing::debug!(gate = %self.state.name(), "condition dropped, aborting child");
                }
                child.stop();
                Status::Failure
            }
        } else {
            if !self.state.status().is_running() && condition.check_condition(ctx) {
                self.accessed = true;
            }
            if self.accessed {
                child.tick(ctx)
            } else {
                Status::Failure
            }
        }
    }
}

impl<A> Behavior<A> for Gate<A> {
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        let status = self.tick_inner(ctx);
        self.state.set_status(status);
        status
    }

    fn stop(&mut self) {
        if let Some(child) = self.child.as_mut() {
            child.stop();
        }
        self.state.set_status(Status::Resting);
        // The latch survives a plain stop; only reset clears it.
    }

    fn set_paused(&mut self, paused: bool) {
        self.state.set_paused(paused);
        if let Some(child) = self.child.as_mut() {
            child.set_paused(paused);
        }
    }

    fn reset(&mut self) {
        self.accessed = false;
        if let Some(condition) = self.condition.as_mut() {
            condition.reset();
        }
        if let Some(child) = self.child.as_mut() {
            child.reset();
        }
        self.state.set_status(Status::Resting);
    }
}
