//! Tournament Runner for ML-checkers
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Loading match settings from TOML
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and random engines
//! cargo run -p tournament -- match minimax random --games 20 --depth 3
//!
//! # Take settings from a file and keep the report
//! cargo run -p tournament -- match minimax random --config match.toml --output report.json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
