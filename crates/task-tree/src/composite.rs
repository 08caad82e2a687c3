//! Composite nodes controlling the flow across multiple children.
//!
//! [`Sequence`] (AND logic) and [`Selector`] (OR logic) evaluate children
//! left to right with short-circuiting. Both are Running-aware: a child
//! that stays in flight is remembered by index and resumed on the next
//! tick without re-ticking its earlier siblings; any terminal result
//! resets the cursor. A child reporting `Resting` (nothing to do) is
//! skipped in both composites.

use crate::Status;
use crate::task::{Behavior, Ctx};

/// Executes children in order until one fails.
///
/// - `Failure` from a child fails the sequence immediately
/// - `Success` moves on to the next child within the same tick
/// - `Running` holds the cursor and returns `Running`
/// - all children done means `Success`
pub struct Sequence<A> {
    children: Vec<Box<dyn Behavior<A>>>,
    cursor: usize,
}

impl<A> Sequence<A> {
    /// Creates a new sequence with the given child nodes.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<A>>>) -> Self {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        Self { children, cursor: 0 }
    }
}

impl<A> Behavior<A> for Sequence<A> {
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(ctx) {
                Status::Success | Status::Resting => self.cursor += 1,
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure;
                }
                Status::Running => return Status::Running,
            }
        }
        self.cursor = 0;
        Status::Success
    }

    fn stop(&mut self) {
        for child in &mut self.children {
            child.stop();
        }
        self.cursor = 0;
    }

    fn set_paused(&mut self, paused: bool) {
        for child in &mut self.children {
            child.set_paused(paused);
        }
    }

    fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
        self.cursor = 0;
    }
}

/// Executes children in order until one succeeds.
///
/// - `Success` from a child succeeds the selector immediately
/// - `Failure` moves on to the next child within the same tick
/// - `Running` holds the cursor and returns `Running`
/// - all children failed means `Failure`
pub struct Selector<A> {
    children: Vec<Box<dyn Behavior<A>>>,
    cursor: usize,
}

impl<A> Selector<A> {
    /// Creates a new selector with the given child nodes.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<A>>>) -> Self {
        assert!(!children.is_empty(), "Selector must have at least one child");
        Self { children, cursor: 0 }
    }
}

impl<A> Behavior<A> for Selector<A> {
    fn tick(&mut self, ctx: &mut Ctx<'_, A>) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(ctx) {
                Status::Failure | Status::Resting => self.cursor += 1,
                Status::Success => {
                    self.cursor = 0;
                    return Status::Success;
                }
                Status::Running => return Status::Running,
            }
        }
        self.cursor = 0;
        Status::Failure
    }

    fn stop(&mut self) {
        for child in &mut self.children {
            child.stop();
        }
        self.cursor = 0;
    }

    fn set_paused(&mut self, paused: bool) {
        for child in &mut self.children {
            child.set_paused(paused);
        }
    }

    fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
        self.cursor = 0;
    }
}
