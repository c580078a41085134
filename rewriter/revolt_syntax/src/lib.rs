//! Lossless syntax tree for the assertion rewriter.
//!
//! This crate is the tree model the rewrite engine works against: a
//! full-fidelity tokenizer, a conservative parser that recognizes call
//! expressions and balanced delimiter groups, and a printer that
//! reproduces unmodified input byte-for-byte.
//!
//! # Architecture
//!
//! - [`lex`]: tokenizer attaching trivia (whitespace, comments) to the
//!   following token
//! - [`parse`]: arena-based tree of verbatim runs, groups, and call sites
//! - [`print_tree`]: emits `lead + text` per token; renders synthesized
//!   replacements from structure
//!
//! Replacement is structural: the rewriter writes a [`Node::Synth`] into a
//! call's arena slot, leaving all other node indices valid.

pub mod cursor;
mod error;
mod lexer;
mod parser;
mod printer;
mod span;
mod synth;
mod token;
mod tree;

pub use error::ParseError;
pub use lexer::lex;
pub use parser::parse;
pub use printer::{print_to, print_tree, Emitter, StringEmitter};
pub use span::Span;
pub use synth::{SynthArg, SynthExpr, SynthNode};
pub use token::{Token, TokenId, TokenKind, TokenList};
pub use tree::{ArgLabel, Argument, CallNode, Node, NodeId, SyntaxTree, TokenRange};
