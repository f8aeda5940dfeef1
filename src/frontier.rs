//! Min-priority frontier over arena indices.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, SearchNode};

/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest key first. The arena index rides along as payload.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    index: usize,
}

/// The not-yet-expanded nodes of one search, ordered by [`FrontierKey`].
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the node stored at `index` in the arena.
    pub fn push(&mut self, node: &SearchNode, index: usize) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node)),
            index,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Arena index of the best node, removed from the frontier.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
