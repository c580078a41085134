//! Shared helpers for assembling replacement expressions.
//!
//! Conversion rules never fabricate delimiters for the common macro-wrap
//! shapes: the replacement reuses the matched call's own paren tokens, so
//! nothing else on the line drifts. The closure-wrap and failure-record
//! shapes print fresh parens, matching the structure they introduce.

use revolt_syntax::{Argument, CallNode, SynthArg, SynthExpr};

/// Build a macro-style call that replaces the full argument list of the
/// original call while keeping its delimiter tokens. The resulting
/// argument order is exactly `args`.
pub fn macro_call(name: &'static str, call: &CallNode, args: Vec<SynthArg>) -> SynthExpr {
    SynthExpr::MacroCall {
        name,
        lparen: Some(call.lparen),
        args,
        rparen: Some(call.rparen),
        trailing_closure: None,
    }
}

/// An original argument expression, printed with its own formatting.
pub fn verbatim(arg: &Argument) -> SynthExpr {
    SynthExpr::Verbatim {
        node: arg.expr,
        trim_leading: false,
    }
}

/// An original argument expression with its leading trivia dropped, used
/// where the operand must sit flush against synthesized text (after an
/// operator or inside a fresh closure).
pub fn verbatim_trimmed(arg: &Argument) -> SynthExpr {
    SynthExpr::Verbatim {
        node: arg.expr,
        trim_leading: true,
    }
}
