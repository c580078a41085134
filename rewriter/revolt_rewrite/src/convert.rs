//! Conversion rules for legacy assertion calls.
//!
//! Every rule is one variant of [`Converter`]: a stateless mapping from a
//! call site's argument shape to a synthesized replacement. Building
//! returns `None` when the shape does not satisfy the rule's
//! preconditions; the walker treats that exactly like an unknown name and
//! leaves the call untouched.
//!
//! Extra legacy arguments beyond what a rule consumes — typically a
//! trailing diagnostic message — are dropped. That loss is deliberate and
//! is surfaced through the rewrite outcome's `lossy` count.

use crate::synthesize::{macro_call, verbatim, verbatim_trimmed};
use revolt_syntax::{CallNode, SynthArg, SynthExpr};

/// Target macro for macro-wrapping rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MacroName {
    Expect,
    Require,
}

impl MacroName {
    pub fn as_str(self) -> &'static str {
        match self {
            MacroName::Expect => "expect",
            MacroName::Require => "require",
        }
    }
}

/// Which error expectation a closure-wrap rule asserts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThrowsPolarity {
    /// The body must throw: `throws: (any Error).self`.
    AnyError,
    /// The body must not throw: `throws: Never.self`.
    NoError,
}

impl ThrowsPolarity {
    fn type_expr(self) -> &'static str {
        match self {
            ThrowsPolarity::AnyError => "(any Error).self",
            ThrowsPolarity::NoError => "Never.self",
        }
    }
}

/// A conversion rule shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Converter {
    /// `name(cond, ...)` → `<macro>(cond)`.
    MacroWrap(MacroName),
    /// `name(cond)` → `expect(!cond)`.
    NegatedMacroWrap,
    /// `name(lhs, rhs)` → `expect(lhs <op> rhs)`.
    Infix { op: &'static str },
    /// `name(value, ...)` → `expect(value <op> nil)`.
    NilComparison { op: &'static str },
    /// `name(expr, ...)` → `expect(throws: <type>) { expr }`.
    ErrorAssertion(ThrowsPolarity),
    /// `name(message, ...)` → `Issue.record(message)`.
    FailureRecord,
}

impl Converter {
    /// Build the replacement expression for a matched call site.
    ///
    /// Returns `None` when the argument shape violates the rule's
    /// precondition. This is a local, silent failure — never an error.
    pub fn build_expr(&self, call: &CallNode) -> Option<SynthExpr> {
        match *self {
            Converter::MacroWrap(macro_name) => {
                let arg = call.args.first()?;
                Some(macro_call(
                    macro_name.as_str(),
                    call,
                    vec![SynthArg::positional(verbatim(arg))],
                ))
            }
            Converter::NegatedMacroWrap => {
                if call.args.len() != 1 {
                    return None;
                }
                let inverted = SynthExpr::Prefix {
                    op: "!",
                    expr: verbatim(&call.args[0]).boxed(),
                };
                Some(macro_call(
                    MacroName::Expect.as_str(),
                    call,
                    vec![SynthArg::positional(inverted)],
                ))
            }
            Converter::Infix { op } => {
                if call.args.len() != 2 {
                    return None;
                }
                let comparison = SynthExpr::Infix {
                    lhs: verbatim(&call.args[0]).boxed(),
                    op,
                    rhs: verbatim_trimmed(&call.args[1]).boxed(),
                };
                Some(macro_call(
                    MacroName::Expect.as_str(),
                    call,
                    vec![SynthArg::positional(comparison)],
                ))
            }
            Converter::NilComparison { op } => {
                let arg = call.args.first()?;
                let comparison = SynthExpr::Infix {
                    lhs: verbatim(arg).boxed(),
                    op,
                    rhs: SynthExpr::NilLiteral.boxed(),
                };
                Some(macro_call(
                    MacroName::Expect.as_str(),
                    call,
                    vec![SynthArg::positional(comparison)],
                ))
            }
            Converter::ErrorAssertion(polarity) => {
                let arg = call.args.first()?;
                Some(SynthExpr::MacroCall {
                    name: MacroName::Expect.as_str(),
                    lparen: None,
                    args: vec![SynthArg::labeled(
                        "throws",
                        SynthExpr::Raw(polarity.type_expr()),
                    )],
                    rparen: None,
                    trailing_closure: Some(
                        SynthExpr::Closure {
                            body: verbatim_trimmed(arg).boxed(),
                        }
                        .boxed(),
                    ),
                })
            }
            Converter::FailureRecord => {
                let arg = call.args.first()?;
                Some(SynthExpr::MemberCall {
                    base: "Issue",
                    member: "record",
                    args: vec![SynthArg::positional(verbatim(arg))],
                })
            }
        }
    }

    /// How many legacy arguments the rule consumes. Arguments beyond this
    /// are dropped by a successful conversion.
    pub fn consumed_args(&self) -> usize {
        match self {
            Converter::Infix { .. } => 2,
            _ => 1,
        }
    }
}
