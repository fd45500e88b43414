//! Per-iteration guards for early termination.
//!
//! The engine polls its guard once before every frontier pop. A guard that
//! returns `false` stops the search; the outcome is unsolved and carries the
//! partial explored trace.

use std::time::{Duration, Instant};

use crate::policy::SearchPolicy;

/// Zero-argument continuation predicate.
pub trait SearchGuard {
    fn should_continue(&mut self) -> bool;
}

impl<F> SearchGuard for F
where
    F: FnMut() -> bool,
{
    fn should_continue(&mut self) -> bool {
        self()
    }
}

/// Never stops the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl SearchGuard for Unbounded {
    fn should_continue(&mut self) -> bool {
        true
    }
}

/// Allows at most `limit` pops.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionBudget {
    limit: u64,
    used: u64,
}

impl ExpansionBudget {
    #[must_use]
    pub fn new(limit: u64) -> Self {
        Self { limit, used: 0 }
    }

    #[must_use]
    pub fn used(&self) -> u64 {
        self.used
    }
}

impl SearchGuard for ExpansionBudget {
    fn should_continue(&mut self) -> bool {
        if self.used >= self.limit {
            return false;
        }
        self.used += 1;
        true
    }
}

/// Stops once a wall-clock instant has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    #[must_use]
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// A deadline `budget` from now, or `None` if that instant is not
    /// representable.
    #[must_use]
    pub fn after(budget: Duration) -> Option<Self> {
        Instant::now().checked_add(budget).map(Self::at)
    }
}

impl SearchGuard for Deadline {
    fn should_continue(&mut self) -> bool {
        Instant::now() < self.at
    }
}

/// Continues only while both guards continue. Short-circuits on the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllOf<A, B>(pub A, pub B);

impl<A: SearchGuard, B: SearchGuard> SearchGuard for AllOf<A, B> {
    fn should_continue(&mut self) -> bool {
        self.0.should_continue() && self.1.should_continue()
    }
}

/// The budgets configured by a [`SearchPolicy`], started at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyGuard {
    budget: Option<ExpansionBudget>,
    deadline: Option<Deadline>,
}

impl PolicyGuard {
    /// Start the policy's budgets. The time limit runs from this call.
    #[must_use]
    pub fn start(policy: &SearchPolicy) -> Self {
        Self {
            budget: policy.max_expansions.map(ExpansionBudget::new),
            deadline: policy.time_limit.and_then(Deadline::after),
        }
    }
}

impl SearchGuard for PolicyGuard {
    fn should_continue(&mut self) -> bool {
        if let Some(budget) = &mut self.budget {
            if !budget.should_continue() {
                return false;
            }
        }
        match &mut self.deadline {
            Some(deadline) => deadline.should_continue(),
            None => true,
        }
    }
}
