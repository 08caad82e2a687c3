//! Decorator nodes wrapping a single child.
//!
//! The conditional [`Gate`](crate::Gate) lives in its own module; this one
//! holds the small result-mapping decorators.

use crate::Status;
use crate::task::{Behavior, Ctx};

/// Inverts the result of its child behavior.
///
/// `Success` becomes `Failure` and vice versa; `Running` and `Resting`
/// pass through untouched.
pub struct Inverter<A> {
    child: Box<dyn Behavior<A>>,
}

impl<A> Inverter<A> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<A>>) -> Self {
        Self { child }
    }
}

impl<A> Behavior<A> for Inverter<A> {
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        self.child.tick(ctx).invert()
    }

    fn stop(&mut self) {
        self.child.stop();
    }

    fn set_paused(&mut self, paused: bool) {
        self.child.set_paused(paused);
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, ActionRunner, ActionScope};
    use blackboard::Blackboard;

    struct World;

    struct Finish {
        ticks: u32,
        succeed: bool,
    }

    impl Action<World> for Finish {
        fn on_update(&mut self, scope: &mut ActionScope<'_, World>) {
            if scope.elapsed_ticks() + 1 >= self.ticks {
                scope.finish(self.succeed);
            }
        }
    }

    fn wrap(ticks: u32, succeed: bool) -> Inverter<World> {
        Inverter::new(Box::new(ActionRunner::new("leaf", Finish { ticks, succeed })))
    }

    #[test]
    fn inverts_terminals() {
        let mut bb = Blackboard::new("test");
        let mut world = World;

        let mut inv = wrap(1, true);
        assert_eq!(inv.tick(&mut Ctx::new(&mut world, &mut bb)), Status::Failure);

        let mut inv = wrap(1, false);
        assert_eq!(inv.tick(&mut Ctx::new(&mut world, &mut bb)), Status::Success);
    }

    #[test]
    fn running_passes_through() {
        let mut bb = Blackboard::new("test");
        let mut world = World;

        let mut inv = wrap(2, true);
        assert_eq!(inv.tick(&mut Ctx::new(&mut world, &mut bb)), Status::Running);
        assert_eq!(inv.tick(&mut Ctx::new(&mut world, &mut bb)), Status::Failure);
    }
}
