//! Cycle detection and work bounding for recursive relation checks.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RecursionResult {
    Entered,
    /// The key is already on the stack.
    Cycle,
    DepthExceeded,
    IterationExceeded,
}

#[derive(Debug)]
pub(crate) struct RecursionGuard<K: Hash + Eq + Copy> {
    visiting: HashSet<K>,
    depth: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    pub(crate) fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            visiting: HashSet::new(),
            depth: 0,
            iterations: 0,
            max_depth,
            max_iterations,
        }
    }

    pub(crate) fn enter(&mut self, key: K) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);

        if self.iterations > self.max_iterations {
            return RecursionResult::IterationExceeded;
        }
        if self.depth >= self.max_depth {
            return RecursionResult::DepthExceeded;
        }
        if !self.visiting.insert(key) {
            return RecursionResult::Cycle;
        }
        self.depth += 1;
        RecursionResult::Entered
    }

    pub(crate) fn leave(&mut self, key: K) {
        let removed = self.visiting.remove(&key);
        debug_assert!(removed, "RecursionGuard::leave called for a key that was not entered");
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub(crate) fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }
}
