//! Synthesized replacement expressions.
//!
//! A successful conversion does not edit the original call node; it builds
//! one of these freshly constructed expressions and the walker writes it
//! into the call's arena slot. [`SynthExpr::Verbatim`] re-uses original
//! subtrees (argument expressions) so their internal formatting survives,
//! and delimiter tokens can be carried over from the original call so the
//! rewritten line keeps its exact paren trivia.

use crate::token::TokenId;
use crate::tree::NodeId;

/// A synthesized node occupying a former call site's slot.
///
/// `lead` names the token whose leading trivia the replacement inherits —
/// always the original callee — so the rewritten expression keeps the
/// original indentation and preceding comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthNode {
    pub lead: TokenId,
    pub expr: SynthExpr,
}

/// A freshly built expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SynthExpr {
    /// Macro-style call: `name(args...) [trailing closure]`.
    ///
    /// `lparen`/`rparen` reuse the original call's delimiter tokens when
    /// present; `None` prints a fresh bare paren.
    MacroCall {
        name: &'static str,
        lparen: Option<TokenId>,
        args: Vec<SynthArg>,
        rparen: Option<TokenId>,
        trailing_closure: Option<Box<SynthExpr>>,
    },
    /// Member call with fresh delimiters: `base.member(args...)`.
    MemberCall {
        base: &'static str,
        member: &'static str,
        args: Vec<SynthArg>,
    },
    /// Prefix operator application: `!expr`.
    Prefix {
        op: &'static str,
        expr: Box<SynthExpr>,
    },
    /// Binary expression with exactly one space around the operator.
    Infix {
        lhs: Box<SynthExpr>,
        op: &'static str,
        rhs: Box<SynthExpr>,
    },
    /// Zero-parameter closure: `{ body }`.
    Closure { body: Box<SynthExpr> },
    /// An original subtree, printed with its own formatting. With
    /// `trim_leading` the first token's trivia is dropped, used to pull an
    /// operand flush against a synthesized operator.
    Verbatim { node: NodeId, trim_leading: bool },
    /// The literal `nil`.
    NilLiteral,
    /// Fixed text with no structure of its own, e.g. `(any Error).self`.
    Raw(&'static str),
}

impl SynthExpr {
    /// Box helper for operand positions.
    pub fn boxed(self) -> Box<SynthExpr> {
        Box::new(self)
    }
}

/// One synthesized argument, optionally labeled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthArg {
    pub label: Option<&'static str>,
    pub expr: SynthExpr,
}

impl SynthArg {
    pub fn positional(expr: SynthExpr) -> Self {
        SynthArg { label: None, expr }
    }

    pub fn labeled(label: &'static str, expr: SynthExpr) -> Self {
        SynthArg {
            label: Some(label),
            expr,
        }
    }
}
