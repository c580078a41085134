//! Lexing and parsing errors.
//!
//! These are the only errors the tree model produces. Everything downstream
//! (unknown callee, unconvertible argument shape) is signaled by absence,
//! never by an error.

use thiserror::Error;

/// Failure to turn source text into a syntax tree.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated string literal starting at byte {start}")]
    UnterminatedString { start: u32 },

    #[error("unterminated block comment starting at byte {start}")]
    UnterminatedComment { start: u32 },

    #[error("missing `{expected}` for delimiter opened at byte {open}")]
    UnclosedDelimiter { expected: char, open: u32 },

    #[error("unexpected closing `{found}` at byte {at}")]
    UnexpectedCloser { found: char, at: u32 },

    #[error("source exceeds the supported size of 4 GiB")]
    SourceTooLarge,
}
