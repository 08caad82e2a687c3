//! Builder utilities for ergonomic tree construction.
//!
//! Helper functions reducing boilerplate when wiring trees: instead of
//! `Box::new(Sequence::new(vec![...]))` you write `sequence(vec![...])`.

use crate::action::{Action, ActionRunner};
use crate::action_list::ActionList;
use crate::composite::{Selector, Sequence};
use crate::condition::{Condition, ConditionRunner};
use crate::decorator::Inverter;
use crate::gate::Gate;
use crate::task::Behavior;

/// Wraps an action in a runner leaf.
pub fn action<A: 'static>(
    name: &str,
    action: impl Action<A> + 'static,
) -> Box<dyn Behavior<A>> {
    Box::new(ActionRunner::new(name, action))
}

/// Wraps a condition in a runner leaf (Success/Failure, never Running).
pub fn condition<A: 'static>(
    name: &str,
    condition: impl Condition<A> + 'static,
) -> Box<dyn Behavior<A>> {
    Box::new(ConditionRunner::new(name, condition))
}

/// Creates a sequential action list from the given runners.
pub fn action_list<A: 'static>(
    name: &str,
    actions: Vec<ActionRunner<A>>,
) -> Box<dyn Behavior<A>> {
    let mut list = ActionList::sequential(name);
    for a in actions {
        list.push(a);
    }
    Box::new(list)
}

/// Creates a parallel action list from the given runners.
pub fn parallel_list<A: 'static>(
    name: &str,
    actions: Vec<ActionRunner<A>>,
) -> Box<dyn Behavior<A>> {
    let mut list = ActionList::parallel(name);
    for a in actions {
        list.push(a);
    }
    Box::new(list)
}

/// Creates a latch-mode gate around `child`.
pub fn gate<A: 'static>(
    name: &str,
    condition: ConditionRunner<A>,
    child: Box<dyn Behavior<A>>,
) -> Box<dyn Behavior<A>> {
    Box::new(Gate::new(name).with_condition(condition).with_child(child))
}

/// Creates a dynamic (re-evaluating) gate around `child`.
pub fn dynamic_gate<A: 'static>(
    name: &str,
    condition: ConditionRunner<A>,
    child: Box<dyn Behavior<A>>,
) -> Box<dyn Behavior<A>> {
    Box::new(
        Gate::new(name)
            .with_condition(condition)
            .with_child(child)
            .dynamic(),
    )
}

/// Creates a sequence node.
pub fn sequence<A: 'static>(children: Vec<Box<dyn Behavior<A>>>) -> Box<dyn Behavior<A>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
pub fn selector<A: 'static>(children: Vec<Box<dyn Behavior<A>>>) -> Box<dyn Behavior<A>> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
pub fn inverter<A: 'static>(child: Box<dyn Behavior<A>>) -> Box<dyn Behavior<A>> {
    Box::new(Inverter::new(child))
}
