//! Shared fixtures for wayfinder benchmark suites.

use wayfinder_harness::worlds::grid::{Cell, GridWorld};
use wayfinder_harness::worlds::puzzle::{Board, Direction, PuzzleWorld};

/// A `size x size` serpentine maze: every other row is a wall with a single
/// gap, alternating sides. The only route visits every open row end to end,
/// so the path is long and the frontier stays narrow.
///
/// # Panics
///
/// Panics if `size < 3`. Benchmark setup failures are fatal.
#[must_use]
pub fn serpentine_maze(size: usize) -> GridWorld {
    assert!(size >= 3, "serpentine maze needs at least 3 rows");
    let rows: Vec<String> = (0..size)
        .map(|r| {
            if r % 2 == 0 {
                "-".repeat(size)
            } else {
                let gap = if r % 4 == 1 { size - 1 } else { 0 };
                (0..size).map(|c| if c == gap { '-' } else { '%' }).collect()
            }
        })
        .collect();
    let last = i64::try_from(size - 1 - (size - 1) % 2).expect("size fits i64");
    GridWorld::from_rows(&rows, Cell::new(0, 0), Cell::new(last, 0)).expect("valid maze")
}

/// A `size x size` grid with no walls, start and goal in opposite corners.
///
/// # Panics
///
/// Panics if `size == 0`.
#[must_use]
pub fn open_field(size: usize) -> GridWorld {
    let rows = vec!["-".repeat(size); size];
    let far = i64::try_from(size - 1).expect("size fits i64");
    GridWorld::from_rows(&rows, Cell::new(0, 0), Cell::new(far, far)).expect("valid field")
}

/// A 3x3 puzzle scrambled by `moves` pseudo-random blank moves.
///
/// The scramble is a fixed linear congruential sequence, so the same
/// `moves` always yields the same board.
///
/// # Panics
///
/// Panics if board construction fails.
#[must_use]
pub fn scrambled_puzzle(moves: usize) -> PuzzleWorld {
    let mut board = Board::goal(3).expect("3x3 goal");
    let mut seed: u32 = 0x2545_f491;
    let mut applied = 0;
    while applied < moves {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let direction = Direction::ALL[(seed >> 16) as usize % Direction::ALL.len()];
        if let Some(next) = board.slide(direction) {
            board = next;
            applied += 1;
        }
    }
    PuzzleWorld::new(board).expect("scrambles from the goal are solvable")
}
