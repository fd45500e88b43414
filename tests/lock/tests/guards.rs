//! Early-termination lock tests: budgets, deadlines and caller guards on
//! real worlds.

use std::time::{Duration, Instant};

use wayfinder_harness::contract::{SearchWorld, WorldHeuristic};
use wayfinder_harness::runner::{run, Algorithm, RunConfig};
use wayfinder_harness::worlds::grid::{Cell, GridWorld};
use wayfinder_harness::worlds::plane::OpenPlane;
use wayfinder_search::frontier::FifoFrontier;
use wayfinder_search::guard::{AllOf, Deadline, ExpansionBudget, SearchGuard};
use wayfinder_search::heuristic::ZeroHeuristic;
use wayfinder_search::outcome::Termination;
use wayfinder_search::policy::{SearchPolicy, Strategy};
use wayfinder_search::search::{search_with_guard, traverse};

fn open_grid(size: usize) -> GridWorld {
    let rows = vec!["-".repeat(size); size];
    let far = i64::try_from(size - 1).unwrap();
    GridWorld::from_rows(&rows, Cell::new(0, 0), Cell::new(far, far)).unwrap()
}

#[test]
fn expansion_budget_yields_prefix_of_unbounded_trace() {
    let world = open_grid(12);
    let full = run(&world, &RunConfig::new(Algorithm::BreadthFirst)).unwrap();
    for limit in [1u64, 5, 40] {
        let config = RunConfig {
            max_expansions: Some(limit),
            ..RunConfig::new(Algorithm::BreadthFirst)
        };
        let partial = run(&world, &config).unwrap().outcome;
        assert_eq!(partial.termination(), Termination::Aborted);
        assert_eq!(partial.path(), None);
        let n = usize::try_from(limit).unwrap();
        assert_eq!(partial.explored(), &full.outcome.explored()[..n]);
    }
}

#[test]
fn expired_deadline_aborts_before_the_first_pop() {
    let world = open_grid(4);
    let mut guard = Deadline::at(Instant::now());
    let outcome = search_with_guard(
        &world,
        world.start(),
        &world.goal(),
        &ZeroHeuristic,
        &SearchPolicy::default(),
        &mut guard,
    )
    .unwrap();
    assert_eq!(outcome.termination(), Termination::Aborted);
    assert!(outcome.explored().is_empty());
}

#[test]
fn generous_time_limit_does_not_interfere() {
    let world = open_grid(6);
    let config = RunConfig {
        time_limit: Some(Duration::from_secs(60)),
        ..RunConfig::new(Algorithm::AStar)
    };
    let report = run(&world, &config).unwrap();
    assert_eq!(report.outcome.steps(), Some(10));
}

#[test]
fn tightest_of_combined_guards_wins() {
    let plane = OpenPlane::new(Cell::new(0, 0), Cell::new(50, -50));
    let far_deadline = Deadline::after(Duration::from_secs(60)).unwrap();
    let mut guard = AllOf(ExpansionBudget::new(25), far_deadline);
    let outcome = traverse(
        &plane,
        plane.start(),
        &plane.goal(),
        FifoFrontier::new(),
        &ZeroHeuristic,
        &mut guard,
    );
    assert_eq!(outcome.termination(), Termination::Aborted);
    assert_eq!(outcome.stats().expansions, 25);
    assert_eq!(guard.0.used(), 25);
}

#[test]
fn caller_guard_and_policy_budget_compose() {
    let world = open_grid(10);
    let policy = SearchPolicy::new(Strategy::BestFirst).with_max_expansions(50);
    let mut polls = 0u32;
    let mut caller = || {
        polls += 1;
        polls <= 8
    };
    let outcome = search_with_guard(
        &world,
        world.start(),
        &world.goal(),
        &WorldHeuristic(&world),
        &policy,
        &mut caller,
    )
    .unwrap();
    assert_eq!(outcome.termination(), Termination::Aborted);
    assert_eq!(outcome.explored().len(), 8);
}

#[test]
fn infinite_plane_is_bounded_only_by_the_guard() {
    // Depth-first on an unbounded space never returns on its own; the
    // budget is what stops it.
    let plane = OpenPlane::new(Cell::new(0, 0), Cell::new(3, 3));
    let config = RunConfig {
        max_expansions: Some(500),
        ..RunConfig::new(Algorithm::DepthFirst)
    };
    let outcome = run(&plane, &config).unwrap().outcome;
    assert_eq!(outcome.termination(), Termination::Aborted);
    assert_eq!(outcome.stats().expansions, 500);
}

#[test]
fn guard_trait_objects_are_usable() {
    let world = open_grid(5);
    let mut budget = ExpansionBudget::new(2);
    let guard: &mut dyn SearchGuard = &mut budget;
    let outcome = traverse(
        &world,
        world.start(),
        &world.goal(),
        FifoFrontier::new(),
        &ZeroHeuristic,
        guard,
    );
    assert_eq!(outcome.explored().len(), 2);
}
