//! Open plane: the unbounded integer lattice with six moves and no filter.
//!
//! From `(row, col)` the candidates are up, left, down, right, down-right and
//! up-left. The space is infinite, so only breadth-first and best-first
//! searches are guaranteed to terminate; they do whenever the goal exists.

use wayfinder_search::contract::StateSpace;

use crate::contract::SearchWorld;
use crate::worlds::grid::Cell;

/// Six-move lattice between two fixed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPlane {
    start: Cell,
    goal: Cell,
}

impl OpenPlane {
    #[must_use]
    pub fn new(start: Cell, goal: Cell) -> Self {
        Self { start, goal }
    }
}

/// Exact step count between two lattice points under the six moves.
///
/// The diagonal moves only shift both axes in the same direction, so they
/// help only when `dr` and `dc` share a sign.
#[must_use]
pub fn lattice_distance(from: Cell, to: Cell) -> i64 {
    let dr = i128::from(to.row) - i128::from(from.row);
    let dc = i128::from(to.col) - i128::from(from.col);
    let steps = if dr.signum() * dc.signum() > 0 {
        dr.abs().max(dc.abs())
    } else {
        dr.abs() + dc.abs()
    };
    i64::try_from(steps).unwrap_or(i64::MAX)
}

impl StateSpace for OpenPlane {
    type State = Cell;

    fn neighbors(&self, &Cell { row, col }: &Cell) -> Vec<Cell> {
        let up = row.saturating_sub(1);
        let down = row.saturating_add(1);
        let left = col.saturating_sub(1);
        let right = col.saturating_add(1);
        vec![
            Cell::new(up, col),
            Cell::new(row, left),
            Cell::new(down, col),
            Cell::new(row, right),
            Cell::new(down, right),
            Cell::new(up, left),
        ]
    }
}

impl SearchWorld for OpenPlane {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "plane"
    }

    fn start(&self) -> Cell {
        self.start
    }

    fn goal(&self) -> Cell {
        self.goal
    }

    fn estimate(&self, state: &Cell) -> i64 {
        lattice_distance(*state, self.goal)
    }

    fn state_json(&self, state: &Cell) -> serde_json::Value {
        serde_json::json!([state.row, state.col])
    }
}
