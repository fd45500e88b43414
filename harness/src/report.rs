//! Run reports: canonical JSON, content digests and text renderings.
//!
//! # Canonical JSON
//!
//! Object keys are sorted, output is compact, and every number must be an
//! integer. The same report therefore always serializes to the same bytes,
//! which is what the determinism digests rely on.
//!
//! # Digests
//!
//! `sha256(domain || canonical_bytes)`, rendered as `sha256:<hex>`. The
//! domain prefix is null-terminated so no prefix can be confused with the
//! start of a payload.

use std::fmt::Write as _;

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use thiserror::Error;

use wayfinder_search::outcome::{SearchOutcome, Termination};

use crate::contract::SearchWorld;
use crate::runner::RunReport;
use crate::worlds::grid::Cell;
use crate::worlds::puzzle::{move_labels, Board};

/// Domain prefix for run report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"WAYFINDER::SEARCH_REPORT::V1\0";

/// Error while rendering a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// A content-addressed hash: `"algorithm:hex_digest"`.
///
/// The inner string always has exactly one non-empty algorithm and one
/// non-empty digest around the first `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"`. `None` if either side is empty or the
    /// separator is missing.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon + 1 == s.len() {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex}"),
    }
}

/// Canonical JSON bytes of `value`.
///
/// # Errors
///
/// Returns [`ReportError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, ReportError> {
    Ok(sorted_integers_only(value)?.to_string().into_bytes())
}

// Rebuild with objects in key order and reject non-integer numbers.
fn sorted_integers_only(value: &Value) -> Result<Value, ReportError> {
    Ok(match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Value::Number(n.clone()),
        Value::Number(n) => {
            return Err(ReportError::NonIntegerNumber { raw: n.to_string() });
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(sorted_integers_only)
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(map.len());
            for key in keys {
                sorted.insert(key.clone(), sorted_integers_only(&map[key])?);
            }
            Value::Object(sorted)
        }
        other => other.clone(),
    })
}

/// JSON rendering of a run, without timing.
///
/// Everything in it is a deterministic function of the world and the
/// configuration, so its digest is stable across runs and processes.
#[must_use]
pub fn report_json<W: SearchWorld>(world: &W, report: &RunReport<W::State>) -> Value {
    let outcome = &report.outcome;
    let stats = outcome.stats();
    let explored: Vec<Value> = outcome
        .explored()
        .iter()
        .map(|s| world.state_json(s))
        .collect();
    let path = outcome.path().map_or(Value::Null, |p| {
        Value::Array(p.iter().map(|s| world.state_json(s)).collect())
    });

    serde_json::json!({
        "world": report.world_id,
        "algorithm": report.algorithm.as_str(),
        "termination": outcome.termination().as_str(),
        "solved": outcome.is_solved(),
        "steps": outcome.steps(),
        "explored": explored,
        "path": path,
        "stats": {
            "expansions": stats.expansions,
            "generated": stats.generated,
            "filtered": stats.filtered,
            "duplicates_suppressed": stats.duplicates_suppressed,
            "frontier_high_water": stats.frontier_high_water,
            "goal_g_score": stats.goal_g_score,
        },
    })
}

/// Digest of [`report_json`] under [`DOMAIN_SEARCH_REPORT`].
///
/// # Errors
///
/// Propagates [`canonical_json_bytes`] failures.
pub fn report_digest(report: &Value) -> Result<ContentHash, ReportError> {
    let bytes = canonical_json_bytes(report)?;
    Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
}

fn unsolved_line(termination: Termination) -> &'static str {
    match termination {
        Termination::Aborted => "aborted",
        Termination::GoalReached | Termination::FrontierExhausted => "unreachable",
    }
}

/// Grid text report.
///
/// With `include_explored`: the explored count, then one `row col` line per
/// popped cell. Then the path length in moves and one `row col` line per path
/// cell. An unsolved search prints `unreachable` (or `aborted`) in place of
/// the path section.
#[must_use]
pub fn grid_text(outcome: &SearchOutcome<Cell>, include_explored: bool) -> String {
    let mut out = String::new();
    if include_explored {
        let _ = writeln!(out, "{}", outcome.explored().len());
        for cell in outcome.explored() {
            let _ = writeln!(out, "{} {}", cell.row, cell.col);
        }
    }
    match outcome.path() {
        Some(path) => {
            let _ = writeln!(out, "{}", path.len() - 1);
            for cell in path {
                let _ = writeln!(out, "{} {}", cell.row, cell.col);
            }
        }
        None => {
            let _ = writeln!(out, "{}", unsolved_line(outcome.termination()));
        }
    }
    out
}

/// Puzzle text report: the move count, then one blank move per line.
///
/// With `include_explored`, a leading `explored <n>` line is added.
#[must_use]
pub fn puzzle_text(outcome: &SearchOutcome<Board>, include_explored: bool) -> String {
    let mut out = String::new();
    if include_explored {
        let _ = writeln!(out, "explored {}", outcome.explored().len());
    }
    match outcome.path() {
        Some(path) => {
            let moves = move_labels(path);
            let _ = writeln!(out, "{}", moves.len());
            for direction in moves {
                let _ = writeln!(out, "{direction}");
            }
        }
        None => {
            let _ = writeln!(out, "{}", unsolved_line(outcome.termination()));
        }
    }
    out
}
