//! Assertion-migration rewrite engine.
//!
//! Rewrites call sites of the legacy, function-call-based assertion API
//! (`assertEqual(a, b)`, `assertTrue(x)`, `fail("...")`, ...) into the
//! expression-macro API (`expect(a == b)`, `Issue.record("...")`),
//! preserving all surrounding code, formatting, and comments. Code the
//! engine cannot confidently match is left unmodified rather than guessed
//! at.
//!
//! # Architecture
//!
//! - [`Registry`]: fixed catalog mapping legacy callee names to rules
//! - [`Converter`]: the closed set of rule shapes and their builders
//! - `walker`: single top-down pass replacing matched call sites in place
//! - `imports`: rewrites the legacy module import
//!
//! The engine works on `revolt_syntax` trees and knows nothing about
//! files, backups, or dry runs; [`rewrite`] maps text to text.

mod convert;
mod imports;
mod registry;
pub mod synthesize;
mod walker;

pub use convert::{Converter, MacroName, ThrowsPolarity};
pub use imports::{LEGACY_MODULE, TARGET_MODULE};
pub use registry::Registry;
pub use walker::WalkStats;

use revolt_syntax::{parse, print_tree, ParseError};
use thiserror::Error;

/// Failure of a whole-text rewrite. The engine itself cannot fail once the
/// input parses; this only surfaces tree-model errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result of one rewrite pass over one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten text. Byte-identical to the input when nothing
    /// matched.
    pub text: String,
    /// Call sites converted.
    pub converted: usize,
    /// Conversions that dropped extra legacy arguments (diagnostic
    /// messages). Deliberately lossy; callers may want to surface it.
    pub lossy: usize,
    /// Legacy imports rewritten.
    pub imports_rewritten: usize,
}

impl RewriteOutcome {
    /// Whether the pass changed anything.
    pub fn changed(&self) -> bool {
        self.converted > 0 || self.imports_rewritten > 0
    }
}

/// Rewrite `source` with the default rule catalog.
pub fn rewrite(source: &str) -> Result<RewriteOutcome, RewriteError> {
    rewrite_with(source, &Registry::new())
}

/// Rewrite `source` against an explicit registry.
pub fn rewrite_with(source: &str, registry: &Registry) -> Result<RewriteOutcome, RewriteError> {
    let mut tree = parse(source)?;
    let stats = walker::rewrite_tree(&mut tree, registry);
    let imports_rewritten = imports::rewrite_imports(&mut tree);
    Ok(RewriteOutcome {
        text: print_tree(&tree),
        converted: stats.converted,
        lossy: stats.lossy,
        imports_rewritten,
    })
}
