//! Ordered lists of actions, run in sequence or fanned out in parallel.
//!
//! An [`ActionList`] is itself tickable, so lists nest anywhere a single
//! action fits. Aggregation rules:
//!
//! - **Sequential**: one child at a time; a child's success advances the
//!   cursor and chains into the next child within the same tick, a child's
//!   failure fails the list immediately, wherever it sits.
//! - **Parallel**: every child is ticked each list tick, in list order
//!   (same-tick fan-out on one logical thread, deterministic). A failure
//!   fails the list that same tick, but only after the pass has reached
//!   every remaining child; the list succeeds once every child has
//!   succeeded.
//!
//! Inactive children pass through as immediate successes in both modes.
//! An empty list fails: no actions configured is an authoring error, not a
//! vacuous success.
//!
//! A child that never finishes stalls the list in `Running` indefinitely;
//! timeout policy belongs to the driving scheduler, not this crate. After a
//! parallel first-failure, still-running siblings are left as they are and
//! their eventual completions are swallowed: they are only wound down by
//! `stop`/`reset` or when the list re-enters and stops leftovers first.

use crate::Status;
use crate::action::ActionRunner;
use crate::task::{Behavior, Ctx, TaskState};

/// Runs an ordered list of actions in sequence or in parallel.
pub struct ActionList<A> {
    state: TaskState,
    parallel: bool,
    actions: Vec<ActionRunner<A>>,
    cursor: usize,
    completed: Vec<bool>,
}

impl<A> ActionList<A> {
    /// Creates an empty sequential list.
    pub fn sequential(name: impl Into<String>) -> Self {
        Self {
            state: TaskState::new(name),
            parallel: false,
            actions: Vec::new(),
            cursor: 0,
            completed: Vec::new(),
        }
    }

    /// Creates an empty parallel list.
    pub fn parallel(name: impl Into<String>) -> Self {
        Self {
            parallel: true,
            ..Self::sequential(name)
        }
    }

    /// Appends an action (builder form).
    pub fn with_action(mut self, action: ActionRunner<A>) -> Self {
        self.actions.push(action);
        self
    }

    pub fn push(&mut self, action: ActionRunner<A>) {
        self.actions.push(action);
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }

    /// The actions in list order, for authoring inspection.
    pub fn actions(&self) -> &[ActionRunner<A>] {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut [ActionRunner<A>] {
        &mut self.actions
    }

    /// Advances the list by one tick, aggregating child outcomes.
    pub fn execute(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        if !self.state.is_active() {
            return Status::Success;
        }
        if self.state.is_paused() {
            return self.state.status();
        }
        if self.actions.is_empty() {
            tracing::debug!(list = %self.state.name(), "no actions configured");
            return Status::Failure;
        }

        if !self.state.status().is_running() {
            // Fresh entry. Leftover running children from a previous
            // first-failure exit are wound down before starting over.
            for action in &mut self.actions {
                if action.is_running() {
                    action.stop();
                }
            }
            self.cursor = 0;
            self.completed.clear();
            self.completed.resize(self.actions.len(), false);
            self.state.set_status(Status::Running);
        }

        let result = if self.parallel {
            self.parallel_tick(ctx)
        } else {
            self.sequential_tick(ctx)
        };
        if result.is_terminal() {
            self.state.set_status(Status::Resting);
        }
        result
    }

    fn sequential_tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        loop {
            match self.actions[self.cursor].execute(ctx) {
                Status::Failure => return Status::Failure,
                Status::Success => {
                    self.cursor += 1;
                    if self.cursor == self.actions.len() {
                        return Status::Success;
                    }
                    // Chain into the next child within the same tick.
                }
                Status::Running | Status::Resting => return Status::Running,
            }
        }
    }

    fn parallel_tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        // The pass always covers every not-yet-completed child, so a
        // same-tick failure still lets later siblings launch and run their
        // side effects before the list reports it.
        let mut failed = false;
        for (i, action) in self.actions.iter_mut().enumerate() {
            if self.completed[i] {
                continue;
            }
            match action.execute(ctx) {
                Status::Success => self.completed[i] = true,
                Status::Failure => failed = true,
                Status::Running | Status::Resting => {}
            }
        }
        if failed {
            Status::Failure
        } else if self.completed.iter().all(|done| *done) {
            Status::Success
        } else {
            Status::Running
        }
    }

    /// Stops every child unconditionally and clears list bookkeeping.
    pub fn stop(&mut self) {
        for action in &mut self.actions {
            action.stop();
        }
        self.cursor = 0;
        self.completed.clear();
        self.state.set_status(Status::Resting);
        self.state.set_paused(false);
    }

    /// Propagates pause to every child; the list's own status is untouched.
    pub fn set_paused(&mut self, paused: bool) {
        self.state.set_paused(paused);
        for action in &mut self.actions {
            action.set_paused(paused);
        }
    }
}

impl<A> Behavior<A> for ActionList<A> {
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        self.execute(ctx)
    }

    fn stop(&mut self) {
        ActionList::stop(self);
    }

    fn set_paused(&mut self, paused: bool) {
        ActionList::set_paused(self, paused);
    }

    fn reset(&mut self) {
        ActionList::stop(self);
    }
}
