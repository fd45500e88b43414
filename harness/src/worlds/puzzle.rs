//! Sliding puzzle on a `k x k` board.
//!
//! Tiles are stored row-major with `0` as the blank. The goal arrangement is
//! `0, 1, ..., k*k - 1`. A move slides the blank UP, LEFT, RIGHT or DOWN,
//! tried in that order.
//!
//! Input format: `k` followed by `k*k` numbers, row by row.

use std::fmt;

use wayfinder_search::contract::StateSpace;
use wayfinder_search::heuristic::Heuristic;

use crate::contract::{SearchWorld, Tokens, WorldError};

/// Largest supported board edge. Tiles are stored as `u8`.
pub const MAX_BOARD_SIZE: usize = 16;

/// A blank move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// Generation order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Left, Self::Right, Self::Down];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A board arrangement.
///
/// Always a permutation of `0..size*size`; boards are only built through
/// validated constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
}

impl Board {
    /// Validate `tiles` as a `size x size` board.
    ///
    /// # Errors
    ///
    /// - [`WorldError::BoardSize`] if `size` is 0 or above [`MAX_BOARD_SIZE`].
    /// - [`WorldError::NotAPermutation`] if `tiles` has the wrong length, a
    ///   value out of range, or a repeated value.
    pub fn new(size: usize, tiles: &[usize]) -> Result<Self, WorldError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(WorldError::BoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        let cells = size * size;
        if tiles.len() != cells {
            return Err(WorldError::NotAPermutation {
                cells,
                detail: format!("expected {cells} tiles, found {}", tiles.len()),
            });
        }

        let mut seen = vec![false; cells];
        let mut packed = Vec::with_capacity(cells);
        for &tile in tiles {
            let slot = seen.get_mut(tile).ok_or_else(|| WorldError::NotAPermutation {
                cells,
                detail: format!("tile {tile} is out of range"),
            })?;
            if *slot {
                return Err(WorldError::NotAPermutation {
                    cells,
                    detail: format!("tile {tile} appears more than once"),
                });
            }
            *slot = true;
            packed.push(u8::try_from(tile).map_err(|_| WorldError::NotAPermutation {
                cells,
                detail: format!("tile {tile} is out of range"),
            })?);
        }

        Ok(Self {
            size,
            tiles: packed,
        })
    }

    /// The solved board of edge `size`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BoardSize`] if `size` is unsupported.
    pub fn goal(size: usize) -> Result<Self, WorldError> {
        let tiles: Vec<usize> = (0..size * size).collect();
        Self::new(size, &tiles)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub fn blank(&self) -> (usize, usize) {
        let index = self.tiles.iter().position(|&t| t == 0).unwrap_or(0);
        (index / self.size, index % self.size)
    }

    /// The board after sliding the blank one step in `direction`, or `None`
    /// if that would leave the board.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (row, col) = self.blank();
        let (to_row, to_col) = match direction {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
            Direction::Down => (row + 1, col),
        };
        if to_row >= self.size || to_col >= self.size {
            return None;
        }
        let mut next = self.clone();
        next.tiles
            .swap(row * self.size + col, to_row * self.size + to_col);
        Some(next)
    }

    /// Tiles (blank excluded) not at their goal position.
    #[must_use]
    pub fn misplaced(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != 0 && usize::from(tile) != index)
            .count()
    }

    /// Whether the goal arrangement is reachable.
    ///
    /// Every move swaps the blank with a neighbor: it flips the permutation
    /// parity and the parity of the blank's `row + col`. The goal has both
    /// even, so a board is solvable exactly when the two parities agree.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let (row, col) = self.blank();
        self.permutation_parity() == (row + col) % 2
    }

    /// `(cells - cycles) mod 2` of the tile permutation.
    fn permutation_parity(&self) -> usize {
        let cells = self.tiles.len();
        let mut seen = vec![false; cells];
        let mut cycles = 0;
        while let Some(start) = seen.iter().position(|&s| !s) {
            cycles += 1;
            let mut index = start;
            while !seen[index] {
                seen[index] = true;
                index = usize::from(self.tiles[index]);
            }
        }
        (cells - cycles) % 2
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.tiles.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, tile) in chunk.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

/// Count of misplaced tiles, blank excluded. Admissible: each misplaced tile
/// needs at least one move.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic<Board> for MisplacedTiles {
    fn estimate(&self, state: &Board) -> i64 {
        i64::try_from(state.misplaced()).unwrap_or(i64::MAX)
    }
}

/// The blank move that turns `from` into `to`, if they are one move apart.
#[must_use]
pub fn move_between(from: &Board, to: &Board) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&d| from.slide(d).as_ref() == Some(to))
}

/// Blank moves along a start-to-goal path.
#[must_use]
pub fn move_labels(path: &[Board]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|pair| move_between(&pair[0], &pair[1]))
        .collect()
}

/// A solvable puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWorld {
    start: Board,
    goal: Board,
}

impl PuzzleWorld {
    /// # Errors
    ///
    /// Returns [`WorldError::Unsolvable`] if the goal cannot be reached from
    /// `start`.
    pub fn new(start: Board) -> Result<Self, WorldError> {
        if !start.is_solvable() {
            return Err(WorldError::Unsolvable);
        }
        let goal = Board::goal(start.size())?;
        Ok(Self { start, goal })
    }

    /// Parse `k` followed by `k*k` tile numbers.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] for malformed input, an invalid board, or an
    /// unsolvable arrangement.
    pub fn parse(input: &str) -> Result<Self, WorldError> {
        let mut tokens = Tokens::new(input);
        let size: usize = tokens.next_num("board size")?;
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(WorldError::BoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        let mut tiles = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            tiles.push(tokens.next_num("tile")?);
        }
        tokens.finish()?;
        Self::new(Board::new(size, &tiles)?)
    }
}

impl StateSpace for PuzzleWorld {
    type State = Board;

    fn neighbors(&self, state: &Board) -> Vec<Board> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| state.slide(d))
            .collect()
    }
}

impl SearchWorld for PuzzleWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "puzzle"
    }

    fn start(&self) -> Board {
        self.start.clone()
    }

    fn goal(&self) -> Board {
        self.goal.clone()
    }

    fn estimate(&self, state: &Board) -> i64 {
        MisplacedTiles.estimate(state)
    }

    fn state_json(&self, state: &Board) -> serde_json::Value {
        serde_json::json!(state.tiles())
    }
}
