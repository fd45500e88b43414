//! World implementations for the harness runner.

pub mod grid;
pub mod plane;
pub mod puzzle;
