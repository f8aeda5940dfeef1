//! Compares solver verdicts and move counts against a brute-force
//! breadth-first search over the whole reachable state space.

use anyhow::Result;
use npuzzle::{Outcome, PuzzleState, Solver};
use std::collections::{HashSet, VecDeque};

/// Shortest distance to the goal by exhaustive BFS, `None` if unreachable
fn bfs_distance(start: &PuzzleState) -> Option<usize> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start.clone(), 0)]);

    while let Some((state, depth)) = queue.pop_front() {
        if state.is_goal() {
            return Some(depth);
        }
        for next in state.neighbors() {
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Every arrangement of `0..n*n` on an `n`x`n` board
fn all_boards(size: usize) -> Vec<PuzzleState> {
    fn permute(prefix: &mut Vec<u32>, rest: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if rest.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..rest.len() {
            let tile = rest.remove(i);
            prefix.push(tile);
            permute(prefix, rest, out);
            prefix.pop();
            rest.insert(i, tile);
        }
    }

    let mut perms = Vec::new();
    permute(
        &mut Vec::new(),
        &mut (0..(size * size) as u32).collect(),
        &mut perms,
    );
    perms
        .into_iter()
        .map(|tiles| {
            let rows = tiles.chunks(size).map(|row| row.to_vec()).collect();
            PuzzleState::new(rows).unwrap()
        })
        .collect()
}

#[test]
fn spec_scenarios() -> Result<()> {
    let cases = [
        ("3  1 2 3  4 5 6  7 8 0", Some(0)),
        ("3  1 2 3  4 5 6  7 0 8", Some(1)),
        ("3  2 1 3  4 5 6  7 8 0", None),
        ("3  0 1 3  4 2 5  7 8 6", Some(4)),
        ("3  4 1 3  0 2 6  7 5 8", Some(5)),
        ("3  8 1 3  4 0 2  7 6 5", Some(14)),
        ("4  1 2 3 4  5 6 0 8  9 10 7 12  13 14 11 15", Some(3)),
    ];

    for (text, expected) in cases {
        let board: PuzzleState = text.parse()?;
        let outcome = Solver::new(board.clone()).solve()?;
        assert_eq!(outcome.min_moves(), expected, "board {:?}", text);
        assert_eq!(outcome.moves(), expected.map_or(-1, |m| m as i64));
        if board.dimension() == 3 {
            assert_eq!(bfs_distance(&board), expected, "bfs for {:?}", text);
        }
    }
    Ok(())
}

#[test]
fn every_two_by_two_board_matches_bfs() -> Result<()> {
    let boards = all_boards(2);
    assert_eq!(boards.len(), 24);

    let mut solvable = 0;
    for board in &boards {
        let outcome = Solver::new(board.clone()).solve()?;
        let twin = Solver::new(board.twin()).solve()?;

        assert_eq!(outcome.min_moves(), bfs_distance(board), "board\n{}", board);
        assert_ne!(
            outcome.is_solvable(),
            twin.is_solvable(),
            "exactly one of a board and its twin is solvable\n{}",
            board
        );
        if outcome.is_solvable() {
            solvable += 1;
        }
    }
    assert_eq!(solvable, 12);
    Ok(())
}

#[test]
fn solution_paths_are_optimal_and_connected() -> Result<()> {
    let boards = [
        "3  8 1 3  4 0 2  7 6 5",
        "3  1 2 3  0 7 6  5 4 8",
        "3  0 4 3  2 1 6  7 5 8",
    ];

    for text in boards {
        let start: PuzzleState = text.parse()?;
        let Outcome::Solved(solution) = Solver::new(start.clone()).solve()? else {
            panic!("{} is solvable", text);
        };

        let path = solution.boards();
        assert_eq!(Some(solution.min_moves()), bfs_distance(&start));
        assert_eq!(path.len(), solution.min_moves() + 1);
        assert_eq!(path[0], start);
        assert!(path[path.len() - 1].is_goal());
        assert_eq!(solution.moves_list().len(), solution.min_moves());

        let mut replay = start.clone();
        for mv in solution.moves_list() {
            replay = replay.apply_move(mv).expect("recorded move is legal");
        }
        assert!(replay.is_goal());
    }
    Ok(())
}
