//! An agent to solve sliding puzzles optimally, or prove that it cannot be done

use log::{debug, info, trace};

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    error::SolveError,
    frontier::Frontier,
    node::SearchNode,
    puzzle::{Move, PuzzleState},
};

/// Limits applied to a single solve
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop with [`SolveError::BudgetExhausted`] once both searches together
    /// have expanded this many nodes. `None` searches until a verdict.
    pub max_expansions: Option<u64>,
}

/// Counters collected while solving (for diagnostics only)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded by the search from the given board
    pub expansions: u64,
    /// Nodes expanded by the search from its twin
    pub twin_expansions: u64,
    /// Nodes created by both searches, roots included
    pub nodes_created: usize,
    /// Largest size either frontier reached
    pub frontier_high_water: usize,
}

/// A shortest sequence of boards from the starting board to the goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<PuzzleState>,
    stats: SearchStats,
}

impl Solution {
    /// Minimum number of moves to reach the goal
    pub fn min_moves(&self) -> usize {
        self.path.len() - 1
    }

    /// Every board from the start to the goal, both inclusive
    pub fn boards(&self) -> &[PuzzleState] {
        &self.path
    }

    /// The moves taking each board of the solution to the next
    pub fn moves_list(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].move_between(&pair[1]))
            .collect()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// The verdict of a finished solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    Unsolvable { stats: SearchStats },
}

impl Outcome {
    pub fn is_solvable(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    /// Minimum number of moves, or `None` if the goal cannot be reached
    pub fn min_moves(&self) -> Option<usize> {
        match self {
            Outcome::Solved(solution) => Some(solution.min_moves()),
            Outcome::Unsolvable { .. } => None,
        }
    }

    /// Minimum number of moves, with `-1` standing for unsolvable
    pub fn moves(&self) -> i64 {
        self.min_moves().map_or(-1, |moves| moves as i64)
    }

    /// Boards of a shortest solution; empty if unsolvable
    pub fn solution(&self) -> &[PuzzleState] {
        match self {
            Outcome::Solved(solution) => solution.boards(),
            Outcome::Unsolvable { .. } => &[],
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            Outcome::Solved(solution) => solution.stats(),
            Outcome::Unsolvable { stats } => stats,
        }
    }
}

/// One of the two A* searches a solve runs, owning its nodes and frontier
struct Lane {
    label: &'static str,
    arena: Vec<SearchNode>,
    frontier: Frontier,
    expansions: u64,
}

impl Lane {
    fn new(label: &'static str, start: PuzzleState) -> Self {
        let root = SearchNode::root(start);
        let mut frontier = Frontier::new();
        frontier.push(&root, 0);

        Self {
            label,
            arena: vec![root],
            frontier,
            expansions: 0,
        }
    }

    fn pop(&mut self) -> Result<usize, SolveError> {
        self.frontier
            .pop()
            .ok_or(SolveError::FrontierExhausted(self.label))
    }

    fn is_goal(&self, index: usize) -> bool {
        self.arena[index].state.is_goal()
    }

    /// Queue every neighbor of the node at `index` except the board it
    /// was reached from
    fn expand(&mut self, index: usize) {
        let node = &self.arena[index];
        let previous = node.parent.map(|parent| &self.arena[parent].state);
        let moves = node.moves;
        let children: Vec<PuzzleState> = node
            .state
            .neighbors()
            .into_iter()
            .filter(|state| previous != Some(state))
            .collect();

        trace!(
            "[{}] expanding node {} (moves {}, manhattan {}) into {} children",
            self.label,
            index,
            moves,
            node.manhattan,
            children.len()
        );

        for state in children {
            let child_index = self.arena.len();
            let child = SearchNode::child(state, index, moves, child_index as u64);
            self.frontier.push(&child, child_index);
            self.arena.push(child);
        }
        self.expansions += 1;
    }

    /// Boards from the root to the node at `index`
    fn path_to(&self, index: usize) -> Vec<PuzzleState> {
        let mut path = Vec::with_capacity(self.arena[index].moves + 1);
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            path.push(self.arena[i].state.clone());
            cursor = self.arena[i].parent;
        }
        path.reverse();
        path
    }
}

/// An agent to solve sliding puzzles
///
/// # Notes
/// Two A* searches run in lock-step, ordered by moves made plus Manhattan
/// distance: one from the given board and one from its [twin]. Swapping two
/// tiles flips the permutation parity, so exactly one of the pair can reach
/// the goal. Whichever search pops a goal board first decides the verdict;
/// if it is the twin, the given board is unsolvable.
///
/// Each solve owns its nodes and frontiers, so separate `Solver`s can run
/// on separate threads without coordination.
///
/// [twin]: PuzzleState::twin
#[derive(Debug, Clone)]
pub struct Solver {
    initial: PuzzleState,
    config: SolverConfig,
}

impl Solver {
    /// Creates a new `Solver` for a board with no expansion limit
    pub fn new(initial: PuzzleState) -> Self {
        Self {
            initial,
            config: SolverConfig::default(),
        }
    }

    /// Replaces the limits of an existing `Solver`
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial(&self) -> &PuzzleState {
        &self.initial
    }

    /// Runs both searches until one reaches the goal
    ///
    /// Repeated calls are deterministic and return the same outcome.
    pub fn solve(&self) -> Result<Outcome, SolveError> {
        self.run(|| false)
    }

    /// Like [`Solver::solve`], but checks `cancel` once per iteration and
    /// stops with [`SolveError::Cancelled`] when it is set
    pub fn solve_with_cancel(&self, cancel: &AtomicBool) -> Result<Outcome, SolveError> {
        self.run(|| cancel.load(Ordering::Relaxed))
    }

    fn run(&self, cancelled: impl Fn() -> bool) -> Result<Outcome, SolveError> {
        debug!(
            "solving {0}x{0} board with manhattan {1}, hamming {2}",
            self.initial.dimension(),
            self.initial.manhattan(),
            self.initial.hamming()
        );

        let mut main = Lane::new("main", self.initial.clone());
        let mut twin = Lane::new("twin", self.initial.twin());

        loop {
            if cancelled() {
                debug!("search cancelled after {} expansions", main.expansions + twin.expansions);
                return Err(SolveError::Cancelled);
            }

            let current = main.pop()?;
            if main.is_goal(current) {
                let path = main.path_to(current);
                let stats = collect_stats(&main, &twin);
                info!(
                    "solved in {} moves ({} expansions, {} nodes)",
                    path.len() - 1,
                    stats.expansions + stats.twin_expansions,
                    stats.nodes_created
                );
                return Ok(Outcome::Solved(Solution { path, stats }));
            }

            let current_twin = twin.pop()?;
            if twin.is_goal(current_twin) {
                let stats = collect_stats(&main, &twin);
                info!(
                    "twin reached the goal in {} moves, board is unsolvable ({} expansions)",
                    twin.arena[current_twin].moves,
                    stats.expansions + stats.twin_expansions
                );
                return Ok(Outcome::Unsolvable { stats });
            }

            if let Some(budget) = self.config.max_expansions {
                if main.expansions + twin.expansions >= budget {
                    debug!("expansion budget of {} exhausted", budget);
                    return Err(SolveError::BudgetExhausted(budget));
                }
            }

            main.expand(current);
            twin.expand(current_twin);
        }
    }
}

fn collect_stats(main: &Lane, twin: &Lane) -> SearchStats {
    SearchStats {
        expansions: main.expansions,
        twin_expansions: twin.expansions,
        nodes_created: main.arena.len() + twin.arena.len(),
        frontier_high_water: main.frontier.high_water().max(twin.frontier.high_water()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    fn solve(text: &str) -> Outcome {
        let board: PuzzleState = text.parse().unwrap();
        Solver::new(board).solve().unwrap()
    }

    #[test]
    fn goal_board_needs_no_moves() {
        let outcome = solve("3  1 2 3  4 5 6  7 8 0");
        assert!(outcome.is_solvable());
        assert_eq!(outcome.min_moves(), Some(0));
        assert_eq!(outcome.moves(), 0);
        assert_eq!(outcome.solution().len(), 1);
        assert!(outcome.solution()[0].is_goal());
        assert_eq!(outcome.stats().expansions, 0);
    }

    #[test]
    fn one_move_from_goal() {
        let outcome = solve("3  1 2 3  4 5 6  7 0 8");
        assert_eq!(outcome.min_moves(), Some(1));
        match &outcome {
            Outcome::Solved(solution) => assert_eq!(solution.moves_list(), vec![Move::Left]),
            Outcome::Unsolvable { .. } => panic!("board is solvable"),
        }
    }

    #[test]
    fn swapped_pair_is_unsolvable() {
        let outcome = solve("3  2 1 3  4 5 6  7 8 0");
        assert!(!outcome.is_solvable());
        assert_eq!(outcome.min_moves(), None);
        assert_eq!(outcome.moves(), -1);
        assert!(outcome.solution().is_empty());
    }

    #[test]
    fn unsolvable_small_board() {
        let outcome = solve("2  1 0  2 3");
        assert!(!outcome.is_solvable());
        assert!(outcome.stats().twin_expansions > 0);
    }

    #[test]
    fn four_move_board() {
        let outcome = solve("3  0 1 3  4 2 5  7 8 6");
        assert_eq!(outcome.min_moves(), Some(4));

        let Outcome::Solved(solution) = outcome else {
            panic!("board is solvable");
        };
        assert_eq!(
            solution.moves_list(),
            vec![Move::Left, Move::Up, Move::Left, Move::Up]
        );
    }

    #[test]
    fn solution_path_is_a_chain_of_single_moves() {
        let start: PuzzleState = "3  8 1 3  4 0 2  7 6 5".parse().unwrap();
        let outcome = Solver::new(start.clone()).solve().unwrap();
        let boards = outcome.solution();

        assert_eq!(boards.first(), Some(&start));
        assert!(boards.last().unwrap().is_goal());
        assert_eq!(boards.len() as i64, outcome.moves() + 1);
        for pair in boards.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]));
        }
    }

    #[test]
    fn repeated_solves_agree() {
        let solver = Solver::new("3  4 1 3  0 2 6  7 5 8".parse().unwrap());
        let first = solver.solve().unwrap();
        let second = solver.solve().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn budget_stops_the_search() {
        let board: PuzzleState = "3  8 1 3  4 0 2  7 6 5".parse().unwrap();
        let solver = Solver::new(board).with_config(SolverConfig {
            max_expansions: Some(4),
        });
        assert_eq!(solver.solve(), Err(SolveError::BudgetExhausted(4)));
    }

    #[test]
    fn budget_does_not_block_goal_board() {
        let solver = Solver::new(PuzzleState::goal(4).unwrap()).with_config(SolverConfig {
            max_expansions: Some(0),
        });
        assert_eq!(solver.solve().unwrap().min_moves(), Some(0));
    }

    #[test]
    fn raised_flag_cancels() {
        let solver = Solver::new(PuzzleState::goal(3).unwrap());
        let cancel = AtomicBool::new(true);
        assert_eq!(solver.solve_with_cancel(&cancel), Err(SolveError::Cancelled));

        cancel.store(false, Ordering::Relaxed);
        assert!(solver.solve_with_cancel(&cancel).unwrap().is_solvable());
    }
}
