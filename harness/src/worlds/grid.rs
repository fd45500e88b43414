//! Grid maze: a rectangular board of open cells and `%` walls.
//!
//! Input format (whitespace separated):
//!
//! ```text
//! start_row start_col
//! goal_row goal_col
//! rows cols
//! <rows lines of cols characters>
//! ```
//!
//! Moves are tried in the order UP, LEFT, RIGHT, DOWN. The filter rejects
//! cells outside the board and walls.

use wayfinder_search::contract::StateSpace;
use wayfinder_search::heuristic::Heuristic;

use crate::contract::{SearchWorld, Tokens, WorldError};

/// Character marking an impassable cell.
pub const WALL: char = '%';

/// A board position, ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Candidate moves in generation order: UP, LEFT, RIGHT, DOWN.
    #[must_use]
    pub fn moves(self) -> [Cell; 4] {
        [
            Self::new(self.row.saturating_sub(1), self.col),
            Self::new(self.row, self.col.saturating_sub(1)),
            Self::new(self.row, self.col.saturating_add(1)),
            Self::new(self.row.saturating_add(1), self.col),
        ]
    }

    /// `|dr| + |dc|` to `other`.
    #[must_use]
    pub fn manhattan(self, other: Cell) -> i64 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
            .try_into()
            .unwrap_or(i64::MAX)
    }
}

/// Manhattan distance to a fixed goal. Admissible for unit-cost 4-way moves.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanDistance {
    pub goal: Cell,
}

impl Heuristic<Cell> for ManhattanDistance {
    fn estimate(&self, state: &Cell) -> i64 {
        state.manhattan(self.goal)
    }
}

/// A validated maze with its start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    /// Row-major; `true` for an open cell.
    open: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl GridWorld {
    /// Build a maze from its row strings.
    ///
    /// # Errors
    ///
    /// - [`WorldError::GridShape`] if the rows are empty or ragged.
    /// - [`WorldError::OutOfBounds`] or [`WorldError::Blocked`] if the start
    ///   or goal is not an open cell.
    pub fn from_rows<R: AsRef<str>>(rows: &[R], start: Cell, goal: Cell) -> Result<Self, WorldError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if rows.is_empty() || cols == 0 {
            return Err(WorldError::GridShape {
                detail: "grid must have at least one row and one column".into(),
            });
        }

        let mut open = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != cols {
                return Err(WorldError::GridShape {
                    detail: format!("row {index} has {width} cells, expected {cols}"),
                });
            }
            open.extend(row.chars().map(|c| c != WALL));
        }

        let world = Self {
            rows: rows.len(),
            cols,
            open,
            start,
            goal,
        };
        world.check_endpoint("start", start)?;
        world.check_endpoint("goal", goal)?;
        Ok(world)
    }

    /// Parse the textual maze format.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] for missing or malformed fields, a body that
    /// disagrees with the declared dimensions, or an invalid endpoint.
    pub fn parse(input: &str) -> Result<Self, WorldError> {
        let mut tokens = Tokens::new(input);
        let start = Cell::new(
            tokens.next_num("start row")?,
            tokens.next_num("start column")?,
        );
        let goal = Cell::new(tokens.next_num("goal row")?, tokens.next_num("goal column")?);
        let rows: usize = tokens.next_num("row count")?;
        let cols: usize = tokens.next_num("column count")?;

        // The header is untrusted; rows are only counted as they arrive.
        let mut body = Vec::new();
        for _ in 0..rows {
            body.push(tokens.next_str("grid row")?);
        }
        tokens.finish()?;

        if let Some(first) = body.first() {
            let width = first.chars().count();
            if width != cols {
                return Err(WorldError::GridShape {
                    detail: format!("header declares {cols} columns, row 0 has {width}"),
                });
            }
        }
        Self::from_rows(&body, start, goal)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major index of `cell`, or `None` when it lies outside the board.
    fn index(&self, cell: Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.open[i])
    }

    fn check_endpoint(&self, which: &'static str, cell: Cell) -> Result<(), WorldError> {
        if !self.in_bounds(cell) {
            return Err(WorldError::OutOfBounds {
                which,
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.is_open(cell) {
            return Err(WorldError::Blocked {
                which,
                row: cell.row,
                col: cell.col,
            });
        }
        Ok(())
    }
}

impl StateSpace for GridWorld {
    type State = Cell;

    fn neighbors(&self, state: &Cell) -> Vec<Cell> {
        state.moves().to_vec()
    }

    fn admits(&self, state: &Cell) -> bool {
        self.is_open(*state)
    }
}

impl SearchWorld for GridWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid"
    }

    fn start(&self) -> Cell {
        self.start
    }

    fn goal(&self) -> Cell {
        self.goal
    }

    fn estimate(&self, state: &Cell) -> i64 {
        state.manhattan(self.goal)
    }

    fn state_json(&self, state: &Cell) -> serde_json::Value {
        serde_json::json!([state.row, state.col])
    }
}
