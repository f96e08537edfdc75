//! Containers of pending search nodes.
//!
//! The expansion order of a search is entirely decided by its frontier:
//! a [`FifoFrontier`] yields breadth-first order (required for the
//! first-arrival optimality of unit-cost shortest path), a [`StackFrontier`]
//! yields depth-first order (reaches leaves early, which is what branch and
//! bound needs to tighten its incumbent quickly).

use std::collections::VecDeque;

/// The set of nodes that still have to be expanded.
pub trait Frontier<T> {
    /// Adds a node to the frontier.
    fn push(&mut self, node: T);
    /// Removes the next node to expand, if any.
    fn pop(&mut self) -> Option<T>;
    /// Removes every pending node.
    fn clear(&mut self);
    /// Number of pending nodes.
    fn len(&self) -> usize;
    /// Returns true iff no node is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in first-out frontier.
#[derive(Debug, Clone)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, node: T) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in first-out frontier.
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    stack: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, node: T) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
