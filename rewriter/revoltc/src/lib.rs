//! Command-line driver for the assertion-migration rewriter.
//!
//! Thin shell around `revolt_rewrite`: discovers source files, feeds their
//! text through the engine, and writes the results back (or just reports,
//! in dry-run mode).

pub mod options;
pub mod runner;

pub use options::{parse_args, Options, USAGE};
pub use runner::{run, RunSummary};
