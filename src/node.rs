//! Search nodes and their frontier ordering.

use std::cmp::Ordering;

use crate::puzzle::PuzzleState;

/// A board reached by the search, with the cost of reaching it.
///
/// Nodes live in a per-search arena; `parent` is an index into that arena,
/// so the predecessor links form a tree rooted at the starting board.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The board this node stands for.
    pub state: PuzzleState,
    /// Moves made from the starting board (root = 0).
    pub moves: usize,
    /// Arena index of the node this one was expanded from (`None` for root).
    pub parent: Option<usize>,
    /// Manhattan distance of `state`, computed once.
    pub manhattan: usize,
    /// Insertion counter, used as the final tie-break.
    pub creation_order: u64,
}

impl SearchNode {
    /// Create the root node of a search.
    pub fn root(state: PuzzleState) -> Self {
        let manhattan = state.manhattan();
        Self {
            state,
            moves: 0,
            parent: None,
            manhattan,
            creation_order: 0,
        }
    }

    /// Create a node one move further than the node at `parent` in the arena.
    pub fn child(state: PuzzleState, parent: usize, parent_moves: usize, creation_order: u64) -> Self {
        let manhattan = state.manhattan();
        Self {
            state,
            moves: parent_moves + 1,
            parent: Some(parent),
            manhattan,
            creation_order,
        }
    }

    /// `moves + manhattan`, the A* priority.
    pub fn priority(&self) -> usize {
        self.moves + self.manhattan
    }
}

/// The frontier ordering key: `(priority, manhattan, creation_order)`.
///
/// Lower priority first. On a tie the node closer to the goal wins, then
/// the older node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: usize,
    pub manhattan: usize,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.manhattan.cmp(&other.manhattan))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            priority: node.priority(),
            manhattan: node.manhattan,
            creation_order: node.creation_order,
        }
    }
}
