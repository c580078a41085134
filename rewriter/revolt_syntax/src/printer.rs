//! Printing trees back to text.
//!
//! Printing an unmodified tree reproduces the source byte-for-byte: every
//! token is emitted exactly once, as leading trivia followed by token text.
//! Synthesized nodes are rendered from their structure, inheriting the
//! leading trivia of the call they replaced.

use crate::synth::{SynthArg, SynthExpr, SynthNode};
use crate::tree::{Node, NodeId, SyntaxTree};
use crate::token::TokenId;

/// Trait for emitting printed output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);
}

/// String-based emitter for in-memory printing.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the printed output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Print the whole tree to a string.
pub fn print_tree(tree: &SyntaxTree<'_>) -> String {
    let mut emitter = StringEmitter::with_capacity(tree.source().len());
    print_to(tree, &mut emitter);
    emitter.output()
}

/// Print the whole tree into an emitter.
pub fn print_to(tree: &SyntaxTree<'_>, emitter: &mut impl Emitter) {
    Printer {
        tree,
        out: emitter,
        trim_next_lead: false,
    }
    .node(tree.root());
}

struct Printer<'t, 'a, E: Emitter> {
    tree: &'t SyntaxTree<'a>,
    out: &'t mut E,
    /// Set while entering a trimmed verbatim subtree; cleared by the first
    /// token printed, whose leading trivia is suppressed.
    trim_next_lead: bool,
}

impl<E: Emitter> Printer<'_, '_, E> {
    fn token(&mut self, id: TokenId) {
        if self.trim_next_lead {
            self.trim_next_lead = false;
        } else {
            self.out.emit(self.tree.token_lead(id));
        }
        self.out.emit(self.tree.token_text(id));
    }

    fn node(&mut self, id: NodeId) {
        match self.tree.node(id) {
            Node::Run(range) => {
                for tok in range.token_ids() {
                    self.token(tok);
                }
            }
            Node::Seq(children) => {
                for &child in children {
                    self.node(child);
                }
            }
            Node::Group {
                open,
                children,
                close,
            } => {
                self.token(*open);
                for &child in children {
                    self.node(child);
                }
                self.token(*close);
            }
            Node::Call(call) => {
                self.token(call.callee);
                self.token(call.lparen);
                for arg in &call.args {
                    if let Some(label) = arg.label {
                        self.token(label.name);
                        self.token(label.colon);
                    }
                    self.node(arg.expr);
                    if let Some(comma) = arg.comma {
                        self.token(comma);
                    }
                }
                self.token(call.rparen);
                if let Some(closure) = call.trailing_closure {
                    self.node(closure);
                }
            }
            Node::Synth(synth) => self.synth(synth),
        }
    }

    fn synth(&mut self, synth: &SynthNode) {
        if self.trim_next_lead {
            self.trim_next_lead = false;
        } else {
            self.out.emit(self.tree.token_lead(synth.lead));
        }
        self.synth_expr(&synth.expr);
    }

    fn synth_expr(&mut self, expr: &SynthExpr) {
        match expr {
            SynthExpr::MacroCall {
                name,
                lparen,
                args,
                rparen,
                trailing_closure,
            } => {
                self.out.emit(name);
                match lparen {
                    Some(tok) => self.token(*tok),
                    None => self.out.emit("("),
                }
                self.synth_args(args);
                match rparen {
                    Some(tok) => self.token(*tok),
                    None => self.out.emit(")"),
                }
                if let Some(closure) = trailing_closure {
                    self.out.emit(" ");
                    self.synth_expr(closure);
                }
            }
            SynthExpr::MemberCall { base, member, args } => {
                self.out.emit(base);
                self.out.emit(".");
                self.out.emit(member);
                self.out.emit("(");
                self.synth_args(args);
                self.out.emit(")");
            }
            SynthExpr::Prefix { op, expr } => {
                self.out.emit(op);
                self.synth_expr(expr);
            }
            SynthExpr::Infix { lhs, op, rhs } => {
                self.synth_expr(lhs);
                self.out.emit(" ");
                self.out.emit(op);
                self.out.emit(" ");
                self.synth_expr(rhs);
            }
            SynthExpr::Closure { body } => {
                self.out.emit("{ ");
                self.synth_expr(body);
                self.out.emit(" }");
            }
            SynthExpr::Verbatim { node, trim_leading } => {
                if *trim_leading {
                    self.trim_next_lead = true;
                }
                self.node(*node);
                // An empty subtree never cleared the flag; do not let it
                // leak onto a sibling.
                self.trim_next_lead = false;
            }
            SynthExpr::NilLiteral => self.out.emit("nil"),
            SynthExpr::Raw(text) => self.out.emit(text),
        }
    }

    fn synth_args(&mut self, args: &[SynthArg]) {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            if let Some(label) = arg.label {
                self.out.emit(label);
                self.out.emit(": ");
            }
            self.synth_expr(&arg.expr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn unmodified_tree_round_trips() {
        let cases = [
            "",
            "let x = 1\n",
            "func test() {\n    check(a, b) // inline\n}\n",
            "foo.bar(baz[1], qux: { $0 })",
            "f(\n    a,\n    b,\n)",
            "/* header */\nimport Foundation\n\n// trailing\n",
        ];
        for case in cases {
            let tree = parse(case).unwrap();
            assert_eq!(print_tree(&tree), case, "case: {case:?}");
        }
    }

    #[test]
    fn synth_replacement_inherits_leading_trivia() {
        use crate::synth::{SynthExpr, SynthNode};
        use crate::tree::Node;

        let source = "    probe(x)\n";
        let mut tree = parse(source).unwrap();
        let call_id = tree
            .node_ids()
            .find(|&id| matches!(tree.node(id), Node::Call(_)))
            .unwrap();
        let Node::Call(call) = tree.node(call_id).clone() else {
            unreachable!()
        };
        tree.replace(
            call_id,
            Node::Synth(SynthNode {
                lead: call.callee,
                expr: SynthExpr::Raw("replaced"),
            }),
        );
        assert_eq!(print_tree(&tree), "    replaced\n");
    }
}
