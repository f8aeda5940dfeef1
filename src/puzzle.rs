use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng,
};
use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// A single slide, named by the direction the tile travels into the blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

/// Every move, in the order successors are enumerated
pub const MOVES: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

impl Move {
    /// Position of the sliding tile relative to the blank, as `(row, col)`
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable `n`x`n` sliding puzzle board
///
/// Tiles are stored row-major; `0` is the blank. Every value in `0..n*n`
/// appears exactly once, which construction enforces. Operations that
/// move tiles return a new board and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    size: usize,
    tiles: Box<[u32]>,
    blank: usize,
}

impl PuzzleState {
    /// Builds a board from its rows, rejecting anything that is not a
    /// square permutation of `0..n*n` with `n >= 2`
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, PuzzleError> {
        let size = rows.len();
        check_dimension(size)?;

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(PuzzleError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
        }

        Self::from_flat(size, rows.into_iter().flatten().collect())
    }

    /// The solved board: tiles in reading order, blank in the last cell
    pub fn goal(size: usize) -> Result<Self, PuzzleError> {
        check_dimension(size)?;
        let len = size * size;
        let tiles = (1..len as u32).chain(std::iter::once(0)).collect();

        Ok(Self {
            size,
            tiles,
            blank: len - 1,
        })
    }

    /// A uniformly random arrangement; about half of these are unsolvable
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        let mut tiles = Self::goal(size)?.tiles.into_vec();
        tiles.shuffle(rng);
        Self::from_flat(size, tiles)
    }

    /// A random walk of `steps` legal moves away from the goal, so the
    /// result is always solvable in at most `steps` moves
    pub fn scrambled<R: Rng + ?Sized>(
        size: usize,
        steps: usize,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let mut state = Self::goal(size)?;
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let step = state
                .successors()
                .filter(|(mv, _)| Some(mv.opposite()) != last)
                .choose(rng);

            // every cell of a board with n >= 2 has at least two moves
            if let Some((mv, next)) = step {
                state = next;
                last = Some(mv);
            }
        }

        Ok(state)
    }

    fn from_flat(size: usize, tiles: Vec<u32>) -> Result<Self, PuzzleError> {
        let len = size * size;
        if tiles.len() != len {
            return Err(PuzzleError::MissingTokens {
                expected: len,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; len];
        let mut blank = None;
        for (index, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::TileOutOfRange { tile, size })?;
            if *slot {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            *slot = true;
            if tile == 0 {
                blank = Some(index);
            }
        }

        // n*n distinct values below n*n always include the blank
        let blank = blank.ok_or(PuzzleError::MissingTokens {
            expected: len,
            found: len - 1,
        })?;

        Ok(Self {
            size,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// Board dimension `n`
    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// `(row, col)` of the blank
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.size)
    }

    /// Number of tiles, not counting the blank, that are out of place
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != 0 && tile as usize != index + 1)
            .count()
    }

    /// Sum over all tiles of the row and column distance to their goal cell
    ///
    /// Never overestimates the number of moves left, and any single move
    /// changes it by exactly one.
    pub fn manhattan(&self) -> usize {
        let n = self.size;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| {
                let target = tile as usize - 1;
                (index / n).abs_diff(target / n) + (index % n).abs_diff(target % n)
            })
            .sum()
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles.iter().enumerate().all(|(index, &tile)| {
            if index == last {
                tile == 0
            } else {
                tile as usize == index + 1
            }
        })
    }

    /// Slides the tile on the `mv` side of the blank into it, or returns
    /// `None` if the blank sits on that border
    pub fn apply_move(&self, mv: Move) -> Option<Self> {
        let (dr, dc) = mv.as_offset();
        let (row, col) = self.blank();

        let new_row = row.checked_add_signed(dr).filter(|&r| r < self.size)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < self.size)?;
        let target = new_row * self.size + new_col;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        Some(Self {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Every legal move paired with the board it produces
    pub fn successors(&self) -> impl Iterator<Item = (Move, Self)> + '_ {
        MOVES
            .into_iter()
            .filter_map(move |mv| self.apply_move(mv).map(|next| (mv, next)))
    }

    /// Boards one move away: 2 at a corner, 3 on an edge, 4 inside
    pub fn neighbors(&self) -> Vec<Self> {
        self.successors().map(|(_, next)| next).collect()
    }

    /// The move that turns `self` into `next`, if they are adjacent
    pub fn move_between(&self, next: &Self) -> Option<Move> {
        MOVES
            .into_iter()
            .find(|&mv| self.apply_move(mv).as_ref() == Some(next))
    }

    /// Swaps the first horizontally adjacent pair of non-blank tiles in
    /// reading order
    ///
    /// Exactly one of a board and its twin can reach the goal.
    pub fn twin(&self) -> Self {
        let n = self.size;
        let mut tiles = self.tiles.clone();

        let pair = (0..tiles.len())
            .find(|&i| i % n + 1 < n && tiles[i] != 0 && tiles[i + 1] != 0);
        if let Some(i) = pair {
            tiles.swap(i, i + 1);
        }

        Self {
            size: n,
            tiles,
            blank: self.blank,
        }
    }
}

fn check_dimension(size: usize) -> Result<(), PuzzleError> {
    match size {
        0 => Err(PuzzleError::Empty),
        1 => Err(PuzzleError::DimensionTooSmall(size)),
        _ => Ok(()),
    }
}

fn parse_token(token: &str) -> Result<u32, PuzzleError> {
    token
        .parse()
        .map_err(|_| PuzzleError::InvalidToken(token.to_string()))
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();

        writeln!(f, "{}", self.size)?;
        for row in self.rows() {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the `Display` form: the dimension followed by `n*n` tiles, in
/// any whitespace layout
impl FromStr for PuzzleState {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let size = parse_token(tokens.next().ok_or(PuzzleError::Empty)?)? as usize;
        check_dimension(size)?;

        let len = size * size;
        let tiles = tokens
            .by_ref()
            .take(len)
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        if tiles.len() < len {
            return Err(PuzzleError::MissingTokens {
                expected: len,
                found: tiles.len(),
            });
        }
        if let Some(extra) = tokens.next() {
            return Err(PuzzleError::TrailingTokens(extra.to_string()));
        }

        Self::from_flat(size, tiles)
    }
}
