//! Exhaustive property checks over every 3x3 wall layout.
//!
//! For each of the 128 layouts with an open start `(0,0)` and goal `(2,2)`,
//! every algorithm is checked against an independent distance table:
//! solved exactly when reachable, valid paths, no repeated explored state,
//! and optimal length for the breadth-first and best-first algorithms.

use std::collections::{BTreeSet, VecDeque};

use wayfinder_harness::runner::{run, Algorithm, RunConfig};
use wayfinder_harness::worlds::grid::{Cell, GridWorld};
use wayfinder_search::contract::admissible_neighbors;
use wayfinder_search::outcome::Termination;

const SIZE: i64 = 3;

fn layout(mask: u16) -> Vec<String> {
    (0..SIZE)
        .map(|r| {
            (0..SIZE)
                .map(|c| if mask & (1 << (r * SIZE + c)) != 0 { '%' } else { '-' })
                .collect()
        })
        .collect()
}

/// Masks with the start and goal corners open.
fn masks() -> impl Iterator<Item = u16> {
    (0u16..512).filter(|m| m & 1 == 0 && m & (1 << 8) == 0)
}

/// Reference distance from `start` by plain flood fill.
fn distance(world: &GridWorld, start: Cell, goal: Cell) -> Option<usize> {
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((cell, d)) = queue.pop_front() {
        if cell == goal {
            return Some(d);
        }
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Cell::new(cell.row + dr, cell.col + dc);
            if world.is_open(next) && seen.insert(next) {
                queue.push_back((next, d + 1));
            }
        }
    }
    None
}

fn world(mask: u16) -> GridWorld {
    GridWorld::from_rows(&layout(mask), Cell::new(0, 0), Cell::new(2, 2)).unwrap()
}

#[test]
fn layout_count() {
    assert_eq!(masks().count(), 128);
}

#[test]
fn solved_exactly_when_reachable() {
    for mask in masks() {
        let world = world(mask);
        let reachable = distance(&world, Cell::new(0, 0), Cell::new(2, 2)).is_some();
        for algorithm in Algorithm::ALL {
            let outcome = run(&world, &RunConfig::new(algorithm)).unwrap().outcome;
            assert_eq!(outcome.is_solved(), reachable, "mask {mask:#011b} {algorithm}");
            if !reachable {
                assert_eq!(outcome.termination(), Termination::FrontierExhausted);
                assert_eq!(outcome.path(), None);
            }
        }
    }
}

#[test]
fn paths_are_valid_and_start_to_goal() {
    for mask in masks() {
        let world = world(mask);
        for algorithm in Algorithm::ALL {
            let outcome = run(&world, &RunConfig::new(algorithm)).unwrap().outcome;
            let Some(path) = outcome.path() else { continue };
            assert_eq!(path.first(), Some(&Cell::new(0, 0)));
            assert_eq!(path.last(), Some(&Cell::new(2, 2)));
            for pair in path.windows(2) {
                assert!(
                    admissible_neighbors(&world, &pair[0]).contains(&pair[1]),
                    "mask {mask:#011b} {algorithm}: {:?} -> {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn explored_trace_never_repeats_and_stays_open() {
    for mask in masks() {
        let world = world(mask);
        for algorithm in Algorithm::ALL {
            let outcome = run(&world, &RunConfig::new(algorithm)).unwrap().outcome;
            let unique: BTreeSet<&Cell> = outcome.explored().iter().collect();
            assert_eq!(unique.len(), outcome.explored().len(), "mask {mask:#011b} {algorithm}");
            assert!(outcome.explored().iter().all(|&c| world.is_open(c)));
        }
    }
}

#[test]
fn shortest_paths_for_bfs_ucs_and_astar() {
    for mask in masks() {
        let world = world(mask);
        let expected = distance(&world, Cell::new(0, 0), Cell::new(2, 2));
        for algorithm in [Algorithm::BreadthFirst, Algorithm::UniformCost, Algorithm::AStar] {
            let outcome = run(&world, &RunConfig::new(algorithm)).unwrap().outcome;
            assert_eq!(outcome.steps(), expected, "mask {mask:#011b} {algorithm}");
        }
    }
}

#[test]
fn unreachable_searches_explore_the_whole_component() {
    for mask in masks() {
        let world = world(mask);
        if distance(&world, Cell::new(0, 0), Cell::new(2, 2)).is_some() {
            continue;
        }
        let component: BTreeSet<Cell> = (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |c| Cell::new(r, c)))
            .filter(|&c| distance(&world, Cell::new(0, 0), c).is_some())
            .collect();
        for algorithm in Algorithm::ALL {
            let outcome = run(&world, &RunConfig::new(algorithm)).unwrap().outcome;
            let explored: BTreeSet<Cell> = outcome.explored().iter().copied().collect();
            assert_eq!(explored, component, "mask {mask:#011b} {algorithm}");
        }
    }
}
