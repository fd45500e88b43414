//! Binary that runs every fixture scenario under every algorithm and prints
//! one `label=digest` line per run for cross-process verification.
//!
//! Usage: `search_fixture`

#[path = "../scenarios.rs"]
mod scenarios;

fn main() {
    for (label, digest) in scenarios::fixture_digests() {
        println!("{label}={digest}");
    }
}
