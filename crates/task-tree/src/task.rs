//! Core behavior trait and shared task state.
//!
//! [`Behavior`] is the single polymorphic seam of the runtime: leaves
//! (action/condition runners), composites (action lists, sequences) and
//! decorators (gates, inverters) all implement it, and composites hold
//! their children as `Box<dyn Behavior<A>>`. The trait is generic over the
//! agent type `A`, the runtime entity a task's effects and queries target.
//!
//! Shared per-task bookkeeping (name, enable flag, pause flag, status) is
//! flattened into [`TaskState`], composed into each runner rather than
//! inherited.

use blackboard::Blackboard;

use crate::Status;

/// Tick context handed down the tree: the agent being driven and the
/// variable store scoped to it.
pub struct Ctx<'a, A> {
    pub agent: &'a mut A,
    pub blackboard: &'a mut Blackboard,
}

impl<'a, A> Ctx<'a, A> {
    pub fn new(agent: &'a mut A, blackboard: &'a mut Blackboard) -> Self {
        Self { agent, blackboard }
    }

    /// Reborrows this context for handing to a child node.
    pub fn reborrow(&mut self) -> Ctx<'_, A> {
        Ctx {
            agent: &mut *self.agent,
            blackboard: &mut *self.blackboard,
        }
    }
}

/// A tree node that can be ticked against an agent and blackboard.
///
/// The scheduler (external to this crate) invokes [`Behavior::tick`] once
/// per frame-equivalent on the root; nodes propagate the tick down to
/// whichever children their policy selects. Cancellation is synchronous:
/// [`Behavior::stop`] and [`Behavior::reset`] walk the same child chain.
pub trait Behavior<A>: Send {
    /// Advances this node by one tick and reports its status.
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status;

    /// Aborts in-flight execution back to `Resting` without reporting an
    /// outcome. Authoring state (`active`, latched gate access) survives.
    fn stop(&mut self);

    /// Pauses or resumes. A paused node reports its current status without
    /// advancing; pausing never alters `Status`.
    fn set_paused(&mut self, paused: bool);

    /// Full restart: stop, plus clearing any latched cross-execution state
    /// (e.g. a gate's granted access). Invoked when the owning graph
    /// restarts this node, not on every tick.
    fn reset(&mut self);
}

impl<A> Behavior<A> for Box<dyn Behavior<A>> {
    #[inline]
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn stop(&mut self) {
        (**self).stop();
    }

    #[inline]
    fn set_paused(&mut self, paused: bool) {
        (**self).set_paused(paused);
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Shared bookkeeping composed into every runner.
#[derive(Debug, Clone)]
pub struct TaskState {
    name: String,
    description: String,
    active: bool,
    paused: bool,
    status: Status,
}

impl TaskState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            active: true,
            paused: false,
            status: Status::Resting,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The authoring enable flag. A disabled task is transparent: it
    /// reports immediate success without executing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
