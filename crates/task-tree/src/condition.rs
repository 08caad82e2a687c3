//! Condition leaves: synchronous boolean checks.
//!
//! Unlike actions, conditions never span ticks: every check resolves to a
//! boolean immediately. A [`ConditionRunner`] adds the authoring
//! furnishings on top of the user [`Condition`]: an invert flag, a sticky
//! setup-failure latch, and a one-shot yield override for event-driven
//! conditions ("was a collision registered this tick"). The event handler
//! calls [`ConditionRunner::yield_return`], and exactly the next check uses
//! that value as its raw result before the override auto-clears.

use crate::Status;
use crate::error::SetupError;
use crate::task::{Behavior, Ctx, TaskState};

/// A leaf check that resolves synchronously to a boolean.
pub trait Condition<A>: Send {
    /// Binds the agent/blackboard pair before the first check. An error
    /// makes every check of this runner resolve to `false`.
    fn on_setup(&mut self, _ctx: &mut Ctx<'_, A>) -> Result<(), SetupError> {
        Ok(())
    }

    /// Evaluates the condition. The result is inverted by the runner when
    /// its invert flag is set.
    fn check(&mut self, ctx: &mut Ctx<'_, A>) -> bool;
}

/// Drives a [`Condition`]: setup, inversion, yield override.
pub struct ConditionRunner<A> {
    state: TaskState,
    invert: bool,
    bound: bool,
    init_failed: bool,
    pending: Option<bool>,
    condition: Box<dyn Condition<A>>,
}

impl<A> ConditionRunner<A> {
    pub fn new(name: impl Into<String>, condition: impl Condition<A> + 'static) -> Self {
        Self {
            state: TaskState::new(name),
            invert: false,
            bound: false,
            init_failed: false,
            pending: None,
            condition: Box::new(condition),
        }
    }

    /// Builder form of [`ConditionRunner::set_invert`].
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Disabling a condition makes it transparent: checks resolve to `true`.
    pub fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }

    /// Forces the next check's raw result, before inversion.
    ///
    /// The override is consumed by exactly one check and then auto-clears;
    /// under once-per-tick driving this matches "hold the value for one
    /// tick".
    pub fn yield_return(&mut self, value: bool) {
        self.pending = Some(value);
    }

    /// Evaluates the condition against the given context.
    ///
    /// An inactive condition is transparently `true`. A failed setup is
    /// sticky and resolves every subsequent check to `false`.
    pub fn check_condition(&mut self, ctx: &mut Ctx<'_, A>) -> bool {
        if !self.state.is_active() {
            return true;
        }

        if !self.bound && !self.init_failed {
            match self.condition.on_setup(ctx) {
                Ok(()) => self.bound = true,
                Err(err) => {
                    tracing::warn!(task = %self.state.name(), %err, "condition setup failed");
                    self.init_failed = true;
                }
            }
        }
        if self.init_failed {
            return false;
        }

        let raw = match self.pending.take() {
            Some(forced) => forced,
            None => self.condition.check(ctx),
        };
        if self.invert { !raw } else { raw }
    }
}

impl<A> Behavior<A> for ConditionRunner<A> {
    /// A condition used as a tree leaf maps its boolean straight to a
    /// terminal status; it never reports `Running`.
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        Status::from_bool(self.check_condition(ctx))
    }

    fn stop(&mut self) {
        // An override registered before the stop must not leak into the
        // next run's first check.
        self.pending = None;
    }

    fn set_paused(&mut self, paused: bool) {
        self.state.set_paused(paused);
    }

    fn reset(&mut self) {
        self.pending = None;
    }
}
