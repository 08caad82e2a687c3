//! Action leaves: multi-tick units of work with an explicit completion.
//!
//! An [`Action`] is the user-implemented behavior; an [`ActionRunner`]
//! wraps it with the lifecycle state machine:
//!
//! ```text
//! Resting --setup ok--> Running --finish(b)--> Success/Failure --> Resting
//!            |
//!            +--setup err--> reported as Failure for this tick
//! ```
//!
//! The action signals completion by calling [`ActionScope::finish`] from
//! `on_enter` or `on_update`, either synchronously (completing within the
//! tick) or on a later tick. Finishing at most once per execution is a contract;
//! a second call is a programming error and is ignored in release builds.

use crate::Status;
use crate::error::SetupError;
use crate::task::{Behavior, Ctx, TaskState};

/// A leaf unit of work that may span multiple scheduler ticks.
///
/// All hooks are optional except [`Action::on_update`]. `on_setup` runs
/// once per execution entry, before the first update; `on_enter` runs on
/// the first tick of each execution; `on_update` runs every tick while
/// running, including the first.
pub trait Action<A>: Send {
    /// Binds the agent/blackboard pair for the coming execution. An error
    /// forces the execution to `Failure` without entering `Running`.
    fn on_setup(&mut self, _ctx: &mut Ctx<'_, A>) -> Result<(), SetupError> {
        Ok(())
    }

    /// First tick of an execution, after a successful setup.
    fn on_enter(&mut self, _scope: &mut ActionScope<'_, A>) {}

    /// Ticked every frame-equivalent while running. Call
    /// [`ActionScope::finish`] to complete.
    fn on_update(&mut self, scope: &mut ActionScope<'_, A>);

    /// Execution is being aborted mid-run.
    fn on_stop(&mut self) {}

    /// The owning graph paused or resumed this task mid-run.
    fn on_pause(&mut self, _paused: bool) {}
}

/// What an [`Action`] sees during a tick: the agent, the blackboard, the
/// tick counter for this execution, and the completion latch.
pub struct ActionScope<'a, A> {
    pub agent: &'a mut A,
    pub blackboard: &'a mut blackboard::Blackboard,
    elapsed_ticks: u32,
    completion: &'a mut Option<bool>,
}

impl<'a, A> ActionScope<'a, A> {
    /// Ticks elapsed since this execution entered `Running`. Zero on the
    /// first tick; does not advance while paused.
    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Completes the current execution with the given outcome.
    ///
    /// Transitions Running → Success/Failure exactly once per execution.
    /// Calling it a second time is a contract violation: fatal in debug
    /// builds, a logged no-op in release.
    pub fn finish(&mut self, success: bool) {
        if self.completion.is_some() {
            debug_assert!(false, "finish() called twice in one execution");
            tracing::error!("finish() called twice in one execution; ignored");
            return;
        }
        *self.completion = Some(success);
    }
}

/// Drives an [`Action`] through the task lifecycle.
pub struct ActionRunner<A> {
    state: TaskState,
    elapsed_ticks: u32,
    completion: Option<bool>,
    action: Box<dyn Action<A>>,
}

impl<A> ActionRunner<A> {
    pub fn new(name: impl Into<String>, action: impl Action<A> + 'static) -> Self {
        Self {
            state: TaskState::new(name),
            elapsed_ticks: 0,
            completion: None,
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Enables or disables the task. A disabled task is transparent:
    /// executing it reports immediate success.
    pub fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }

    pub fn is_running(&self) -> bool {
        self.state.status().is_running()
    }

    /// Ticks elapsed in the current execution.
    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Advances this task by one tick.
    ///
    /// Returns `Success`/`Failure` when the execution completes within the
    /// tick (the runner is then back at `Resting`, ready for re-entry) and
    /// `Running` while in flight. A setup failure reports `Failure` and
    /// leaves it visible as the runner's status; setup is retried on the
    /// next entry. A disabled task reports `Success` without executing; a
    /// paused one reports its current status unchanged.
    pub fn execute(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        if !self.state.is_active() {
            return Status::Success;
        }
        if self.state.is_paused() {
            return self.state.status();
        }

        if !self.state.status().is_running() {
            if let Err(err) = self.action.on_setup(ctx) {
                tracing::warn!(task = %self.state.name(), %err, "setup failed, forcing failure");
                // The forced failure is visible on the runner until the
                // next entry or stop clears it.
                self.state.set_status(Status::Failure);
                return Status::Failure;
            }
            self.state.set_status(Status::Running);
            self.elapsed_ticks = 0;
            self.completion = None;

            let mut scope = ActionScope {
                agent: &mut *ctx.agent,
                blackboard: &mut *ctx.blackboard,
                elapsed_ticks: self.elapsed_ticks,
                completion: &mut self.completion,
            };
            self.action.on_enter(&mut scope);
            if self.completion.is_none() {
                let mut scope = ActionScope {
                    agent: &mut *ctx.agent,
                    blackboard: &mut *ctx.blackboard,
                    elapsed_ticks: self.elapsed_ticks,
                    completion: &mut self.completion,
                };
                self.action.on_update(&mut scope);
            }
        } else {
            self.elapsed_ticks += 1;
            let mut scope = ActionScope {
                agent: &mut *ctx.agent,
                blackboard: &mut *ctx.blackboard,
                elapsed_ticks: self.elapsed_ticks,
                completion: &mut self.completion,
            };
            self.action.on_update(&mut scope);
        }

        match self.completion.take() {
            Some(success) => {
                // Terminal outcome is consumed by returning it.
                self.state.set_status(Status::Resting);
                Status::from_bool(success)
            }
            None => Status::Running,
        }
    }

    /// Aborts any in-flight execution back to `Resting`.
    ///
    /// No outcome is reported; `active` is untouched.
    pub fn stop(&mut self) {
        if self.state.status().is_running() {
            tracing::debug!(task = %self.state.name(), "stopping running task");
            self.action.on_stop();
        }
        self.completion = None;
        self.elapsed_ticks = 0;
        self.state.set_status(Status::Resting);
        self.state.set_paused(false);
    }

    /// Pauses or resumes. While paused the task does not advance
    /// `elapsed_ticks`, is not updated, and its status is unchanged.
    pub fn set_paused(&mut self, paused: bool) {
        if self.state.is_paused() == paused {
            return;
        }
        self.state.set_paused(paused);
        if self.state.status().is_running() {
            self.action.on_pause(paused);
        }
    }
}

impl<A> Behavior<A> for ActionRunner<A> {
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        self.execute(ctx)
    }

    fn stop(&mut self) {
        ActionRunner::stop(self);
    }

    fn set_paused(&mut self, paused: bool) {
        ActionRunner::set_paused(self, paused);
    }

    fn reset(&mut self) {
        ActionRunner::stop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackboard::Blackboard;

    struct World {
        counter: i32,
    }

    /// Succeeds after running for `ticks` ticks.
    struct CountDown {
        ticks: u32,
    }

    impl Action<World> for CountDown {
        fn on_update(&mut self, scope: &mut ActionScope<'_, World>) {
            scope.agent.counter += 1;
            if scope.elapsed_ticks() + 1 >= self.ticks {
                scope.finish(true);
            }
        }
    }

    struct FailOnSetup;

    impl Action<World> for FailOnSetup {
        fn on_setup(&mut self, _ctx: &mut Ctx<'_, World>) -> Result<(), SetupError> {
            Err(SetupError::new("missing agent capability"))
        }

        fn on_update(&mut self, _scope: &mut ActionScope<'_, World>) {
            unreachable!("update must not run after failed setup");
        }
    }

    fn ctx<'a>(world: &'a mut World, bb: &'a mut Blackboard) -> Ctx<'a, World> {
        Ctx::new(world, bb)
    }

    #[test]
    fn single_tick_action_completes_synchronously() {
        let mut runner = ActionRunner::new("count", CountDown { ticks: 1 });
        let mut world = World { counter: 0 };
        let mut bb = Blackboard::new("test");

        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Success);
        assert_eq!(runner.status(), Status::Resting);
        assert_eq!(world.counter, 1);
    }

    #[test]
    fn multi_tick_action_stays_running() {
        let mut runner = ActionRunner::new("count", CountDown { ticks: 3 });
        let mut world = World { counter: 0 };
        let mut bb = Blackboard::new("test");

        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Success);
        assert_eq!(world.counter, 3);
        // Ready for a fresh execution.
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        assert_eq!(runner.elapsed_ticks(), 0);
    }

    #[test]
    fn inactive_task_reports_success_without_running() {
        let mut runner = ActionRunner::new("count", CountDown { ticks: 3 });
        runner.set_active(false);
        let mut world = World { counter: 0 };
        let mut bb = Blackboard::new("test");

        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Success);
        assert_eq!(world.counter, 0);
    }

    #[test]
    fn setup_failure_forces_failure() {
        let mut runner = ActionRunner::new("broken", FailOnSetup);
        let mut world = World { counter: 0 };
        let mut bb = Blackboard::new("test");

        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Failure);
        // The forced failure stays visible on the runner.
        assert_eq!(runner.status(), Status::Failure);
        // Setup is retried on the next entry.
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Failure);
        runner.stop();
        assert_eq!(runner.status(), Status::Resting);
    }

    #[test]
    fn paused_task_holds_status_and_elapsed() {
        let mut runner = ActionRunner::new("count", CountDown { ticks: 3 });
        let mut world = World { counter: 0 };
        let mut bb = Blackboard::new("test");

        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        runner.set_paused(true);
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        assert_eq!(world.counter, 1);
        assert_eq!(runner.elapsed_ticks(), 0);

        runner.set_paused(false);
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Success);
        assert_eq!(world.counter, 3);
    }

    #[test]
    fn stop_aborts_without_outcome() {
        let mut runner = ActionRunner::new("count", CountDown { ticks: 3 });
        let mut world = World { counter: 0 };
        let mut bb = Blackboard::new("test");

        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        runner.stop();
        assert_eq!(runner.status(), Status::Resting);
        // Fresh execution starts over.
        assert_eq!(runner.execute(&mut ctx(&mut world, &mut bb)), Status::Running);
        assert_eq!(runner.elapsed_ticks(), 0);
    }
}
