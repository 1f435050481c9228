//! One-shot "fade in when scrolled into view" bookkeeping.

use std::collections::HashSet;

pub const REVEAL_CLASS: &str = "fade-in-up";

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<u32>,
}

impl RevealTracker {
    /// Record that element `key` intersected the viewport.
    ///
    /// Returns `true` only the first time, when the class should be added
    /// and the element unobserved.
    pub fn mark(&mut self, key: u32, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
