//! Tree walker applying conversion rules in a single top-down pass.
//!
//! For every call node with a literal, non-dotted callee: look the name up,
//! ask the rule to build a replacement, and on success overwrite the call's
//! arena slot with the synthesized node. On `None` — unknown name or
//! unconvertible shape — the call stays and its argument expressions and
//! trailing closure are walked instead. Synthesized nodes are never
//! re-visited, so a replacement is not a target for further rewriting in
//! the same pass.

use crate::registry::Registry;
use revolt_syntax::{Node, NodeId, SynthNode, SyntaxTree};
use tracing::{debug, trace};

/// Counters accumulated over one rewrite pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Call sites replaced.
    pub converted: usize,
    /// Conversions that dropped extra legacy arguments.
    pub lossy: usize,
}

/// Run the rewrite pass over the whole tree.
pub fn rewrite_tree(tree: &mut SyntaxTree<'_>, registry: &Registry) -> WalkStats {
    let mut stats = WalkStats::default();
    walk(tree, registry, tree.root(), &mut stats);
    stats
}

fn walk(tree: &mut SyntaxTree<'_>, registry: &Registry, id: NodeId, stats: &mut WalkStats) {
    // Clone the node up front: replacement writes to the arena, and the
    // clone is cheap (ids and small vecs, never source text).
    match tree.node(id).clone() {
        Node::Run(_) | Node::Synth(_) => {}
        Node::Seq(children) => {
            for child in children {
                walk(tree, registry, child, stats);
            }
        }
        Node::Group { children, .. } => {
            for child in children {
                walk(tree, registry, child, stats);
            }
        }
        Node::Call(call) => {
            if !call.dotted {
                let name = tree.token_text(call.callee);
                if let Some(converter) = registry.lookup(name) {
                    if let Some(expr) = converter.build_expr(&call) {
                        let dropped = call.args.len().saturating_sub(converter.consumed_args());
                        debug!(name, dropped, "converted assertion call");
                        tree.replace(
                            id,
                            Node::Synth(SynthNode {
                                lead: call.callee,
                                expr,
                            }),
                        );
                        stats.converted += 1;
                        if dropped > 0 {
                            stats.lossy += 1;
                        }
                        return;
                    }
                    trace!(
                        name,
                        args = call.args.len(),
                        "known assertion call left unchanged: unconvertible shape"
                    );
                }
            }
            for arg in call.args {
                walk(tree, registry, arg.expr, stats);
            }
            if let Some(closure) = call.trailing_closure {
                walk(tree, registry, closure, stats);
            }
        }
    }
}
