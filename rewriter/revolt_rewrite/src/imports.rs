//! Import-statement rewriting.
//!
//! `import XCTest` becomes `import Testing`; every other import is left
//! alone. Import statements never parse as calls, so they live inside
//! verbatim token runs: the rewrite splits the run around the module-name
//! token and drops a synthesized replacement into the gap, keeping the
//! trivia on both sides.

use revolt_syntax::{Node, NodeId, SynthExpr, SynthNode, SyntaxTree, TokenId, TokenKind, TokenRange};
use tracing::debug;

/// Module imported by the legacy assertion API.
pub const LEGACY_MODULE: &str = "XCTest";
/// Module providing the target assertion macros.
pub const TARGET_MODULE: &str = "Testing";

/// Rewrite legacy imports throughout the tree. Returns how many were
/// rewritten.
pub fn rewrite_imports(tree: &mut SyntaxTree<'_>) -> usize {
    let mut count = 0;
    let ids: Vec<NodeId> = tree.node_ids().collect();
    for id in ids {
        let Node::Run(range) = tree.node(id).clone() else {
            continue;
        };
        if let Some(replacement) = split_run(tree, range, &mut count) {
            tree.replace(id, replacement);
        }
    }
    count
}

/// Scan one run for `import <legacy>` pairs. Returns the replacement node
/// when at least one pair was found.
fn split_run(tree: &mut SyntaxTree<'_>, range: TokenRange, count: &mut usize) -> Option<Node> {
    let mut pieces: Vec<NodeId> = Vec::new();
    let mut piece_start = range.start;
    let mut index = range.start;

    while index + 1 < range.end {
        let keyword = TokenId::new(index);
        let module = TokenId::new(index + 1);
        if is_ident(tree, keyword, "import") && is_ident(tree, module, LEGACY_MODULE) {
            debug!("rewrote `import {LEGACY_MODULE}` to `import {TARGET_MODULE}`");
            // Keep everything through the `import` keyword, then replace
            // the module token. Its leading trivia (the separating space)
            // is inherited by the replacement.
            let head = TokenRange::new(piece_start, index + 1);
            if !head.is_empty() {
                pieces.push(tree.alloc(Node::Run(head)));
            }
            pieces.push(tree.alloc(Node::Synth(SynthNode {
                lead: module,
                expr: SynthExpr::Raw(TARGET_MODULE),
            })));
            piece_start = index + 2;
            index += 2;
            *count += 1;
        } else {
            index += 1;
        }
    }

    if piece_start == range.start {
        return None;
    }
    let tail = TokenRange::new(piece_start, range.end);
    if !tail.is_empty() {
        pieces.push(tree.alloc(Node::Run(tail)));
    }
    Some(Node::Seq(pieces))
}

fn is_ident(tree: &SyntaxTree<'_>, id: TokenId, text: &str) -> bool {
    tree.token(id).kind == TokenKind::Ident && tree.token_text(id) == text
}
