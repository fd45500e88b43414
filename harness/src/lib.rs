//! Wayfinder Harness: concrete worlds, the run pipeline and reports.
//!
//! The harness adapts problem domains to the engine's
//! [`wayfinder_search::contract::StateSpace`] contract, runs them under a
//! chosen algorithm and renders the result as text or canonical JSON.
//!
//! The harness does NOT implement search; it delegates to
//! `wayfinder_search`. Worlds provide domain data only.

#![forbid(unsafe_code)]

pub mod cli;
pub mod contract;
pub mod report;
pub mod runner;
pub mod worlds;
