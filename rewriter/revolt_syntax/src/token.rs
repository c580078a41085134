//! Tokens with attached leading trivia.
//!
//! The lexer never emits trivia (whitespace, comments) as tokens. Instead,
//! every token carries the trivia that precedes it as its `lead` span, and
//! the EOF token carries the file's trailing trivia. Printing a token as
//! `lead` followed by `text` therefore reproduces the source byte-for-byte.

use crate::span::Span;
use std::fmt;

/// Index into a [`TokenList`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TokenId(u32);

impl TokenId {
    /// Create a new `TokenId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TokenId(index)
    }

    /// Get the index into the token list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}

/// Token kinds.
///
/// Deliberately coarse: the rewriter only needs to recognize call
/// expressions, so identifiers, the four delimiter pairs, and the three
/// structurally significant separators get their own kinds; every other
/// operator byte is a generic [`TokenKind::Punct`]. The token's text is
/// recovered from its span, never stored.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Identifier or keyword: `expect`, `if`, `try`.
    Ident,
    /// Numeric literal: `42`, `3.14`, `0xFF`.
    Number,
    /// String literal, including multiline and interpolated forms.
    Str,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Dot,
    /// Any other single byte: operators, `;`, `#`, `@`, ...
    Punct,
    /// End of input. Zero-width text; `lead` holds the trailing trivia.
    Eof,
}

impl TokenKind {
    /// Whether this kind opens a delimiter group.
    #[inline]
    pub fn is_opener(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket
        )
    }

    /// Whether this kind closes a delimiter group.
    #[inline]
    pub fn is_closer(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket
        )
    }

    /// The closing kind matching an opener.
    ///
    /// Returns `None` for non-opener kinds.
    pub fn matching_closer(self) -> Option<TokenKind> {
        match self {
            TokenKind::LParen => Some(TokenKind::RParen),
            TokenKind::LBrace => Some(TokenKind::RBrace),
            TokenKind::LBracket => Some(TokenKind::RBracket),
            _ => None,
        }
    }

    /// Display character for delimiter kinds, used in error messages.
    pub fn delimiter_char(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::LBracket => Some('['),
            TokenKind::RBracket => Some(']'),
            _ => None,
        }
    }
}

/// A token: kind plus two source spans.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Trivia preceding the token (whitespace, comments). May be empty.
    pub lead: Span,
    /// The token's own text.
    pub text: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lead: Span, text: Span) -> Self {
        Token { kind, lead, text }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.text)
    }
}

/// Flat list of tokens produced by the lexer.
///
/// Invariant: non-empty, and the last token is always [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl std::ops::Index<TokenId> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }
}
