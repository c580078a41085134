//! Flat arena syntax tree.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`] index.
//! Rewriting never mutates a node in place and never moves children:
//! replacing a node means writing a new node into its slot, which keeps
//! every other index valid and makes a failed rule application free to
//! abandon.
//!
//! The tree is concrete and conservative. Only two constructs are given
//! structure — balanced delimiter groups and call expressions with a
//! literal identifier callee — because those are all the rewriter needs.
//! Everything else is kept as verbatim token runs.

use crate::span::Span;
use crate::synth::SynthNode;
use crate::token::{Token, TokenId, TokenList};
use std::fmt;

/// Index into the node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Half-open range of token indices.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenRange {
    pub start: u32,
    pub end: u32,
}

impl TokenRange {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        TokenRange { start, end }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn token_ids(self) -> impl Iterator<Item = TokenId> {
        (self.start..self.end).map(TokenId::new)
    }
}

/// A syntax tree node.
#[derive(Clone, Debug)]
pub enum Node {
    /// Verbatim run of tokens the parser did not interpret.
    Run(TokenRange),
    /// Ordered children with no delimiters of their own (argument
    /// expressions, the file root).
    Seq(Vec<NodeId>),
    /// Balanced `(...)`, `{...}`, or `[...]`.
    Group {
        open: TokenId,
        children: Vec<NodeId>,
        close: TokenId,
    },
    /// Call expression with a literal identifier callee.
    Call(CallNode),
    /// Freshly synthesized replacement spliced in by the rewriter.
    Synth(SynthNode),
}

/// A parsed call site: `name(arg0, label: arg1, ...) [trailing closure]`.
#[derive(Clone, Debug)]
pub struct CallNode {
    /// The callee identifier token.
    pub callee: TokenId,
    /// Whether the callee is preceded by `.` — a member-chain call, which
    /// the rewriter never touches.
    pub dotted: bool,
    pub lparen: TokenId,
    pub args: Vec<Argument>,
    pub rparen: TokenId,
    /// Brace group immediately following the closing paren, if any.
    pub trailing_closure: Option<NodeId>,
}

/// One call argument. The expression is always a `Seq` node.
#[derive(Clone, Debug)]
pub struct Argument {
    pub label: Option<ArgLabel>,
    pub expr: NodeId,
    /// Separator following this argument, absent on the last one (unless
    /// the source has a trailing comma).
    pub comma: Option<TokenId>,
}

/// An argument label: `name:`.
#[derive(Clone, Copy, Debug)]
pub struct ArgLabel {
    pub name: TokenId,
    pub colon: TokenId,
}

/// The tree: source text, tokens, node arena, root.
#[derive(Debug)]
pub struct SyntaxTree<'a> {
    source: &'a str,
    tokens: TokenList,
    nodes: Vec<Node>,
    root: NodeId,
}

impl<'a> SyntaxTree<'a> {
    pub(crate) fn new(source: &'a str, tokens: TokenList, nodes: Vec<Node>, root: NodeId) -> Self {
        SyntaxTree {
            source,
            tokens,
            nodes,
            root,
        }
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids currently in the arena.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId::new)
    }

    /// Overwrite the node at `id`. Other nodes' indices stay valid.
    #[inline]
    pub fn replace(&mut self, id: NodeId, node: Node) {
        self.nodes[id.index()] = node;
    }

    /// Append a new node, returning its id.
    #[inline]
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn token(&self, id: TokenId) -> &Token {
        self.tokens.get(id)
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The token's own text.
    #[inline]
    pub fn token_text(&self, id: TokenId) -> &'a str {
        self.tokens.get(id).text.text(self.source)
    }

    /// The token's leading trivia text.
    #[inline]
    pub fn token_lead(&self, id: TokenId) -> &'a str {
        self.tokens.get(id).lead.text(self.source)
    }

    /// Span covering the token's trivia and text together.
    pub fn token_full_span(&self, id: TokenId) -> Span {
        let t = self.tokens.get(id);
        Span::new(t.lead.start, t.text.end)
    }
}
