//! Lossless tokenizer.
//!
//! Produces a [`TokenList`] where every byte of the input is covered exactly
//! once, either by a token's text span or by the leading trivia span of the
//! token that follows it. Reprinting `lead + text` for each token in order
//! reproduces the input unchanged.
//!
//! Trivia is whitespace, `//` line comments, and nesting `/* */` block
//! comments. String literals are scanned as single tokens, including
//! multiline (`"""`) and interpolated (`\(...)`) forms, so delimiter and
//! comma bytes inside strings never confuse the parser.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind, TokenList};

/// Tokenize `source`.
///
/// The returned list is non-empty and ends with an EOF token whose lead span
/// holds the file's trailing trivia.
pub fn lex(source: &str) -> Result<TokenList, ParseError> {
    if source.len() > u32::MAX as usize {
        return Err(ParseError::SourceTooLarge);
    }
    Lexer {
        cursor: Cursor::new(source),
    }
    .run()
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl Lexer<'_> {
    fn run(mut self) -> Result<TokenList, ParseError> {
        let mut tokens = TokenList::new();
        loop {
            let lead_start = self.cursor.pos();
            self.skip_trivia()?;
            let lead = Span::new(lead_start, self.cursor.pos());
            let start = self.cursor.pos();

            let Some(byte) = self.cursor.peek() else {
                tokens.push(Token::new(TokenKind::Eof, lead, Span::empty_at(start)));
                break;
            };

            let kind = match byte {
                b'a'..=b'z' | b'A'..=b'Z' | b'_' | 0x80.. => self.ident(),
                b'0'..=b'9' => self.number(),
                b'"' => self.string(start)?,
                b'(' => self.single(TokenKind::LParen),
                b')' => self.single(TokenKind::RParen),
                b'{' => self.single(TokenKind::LBrace),
                b'}' => self.single(TokenKind::RBrace),
                b'[' => self.single(TokenKind::LBracket),
                b']' => self.single(TokenKind::RBracket),
                b',' => self.single(TokenKind::Comma),
                b':' => self.single(TokenKind::Colon),
                b'.' => self.single(TokenKind::Dot),
                _ => self.single(TokenKind::Punct),
            };
            tokens.push(Token::new(kind, lead, Span::new(start, self.cursor.pos())));
        }
        Ok(tokens)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.bump();
        kind
    }

    /// Identifier or keyword. Non-ASCII bytes are treated as identifier
    /// continuation so multi-byte characters are consumed whole.
    fn ident(&mut self) -> TokenKind {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80);
        TokenKind::Ident
    }

    /// Numeric literal. Coarse: digits, letters (hex, exponents, suffix-free
    /// forms), and underscores, plus a fraction part when a dot is followed
    /// by a digit. `x.0` keeps the dot as a member-access token.
    fn number(&mut self) -> TokenKind {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        if self.cursor.peek() == Some(b'.')
            && self.cursor.peek_at(1).is_some_and(|b| b.is_ascii_digit())
        {
            self.cursor.bump();
            self.cursor
                .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        }
        TokenKind::Number
    }

    fn string(&mut self, start: u32) -> Result<TokenKind, ParseError> {
        if self.cursor.starts_with(b"\"\"\"") {
            self.cursor.bump_by(3);
            self.multiline_tail(start)?;
        } else {
            self.cursor.bump();
            self.string_tail(start)?;
        }
        Ok(TokenKind::Str)
    }

    /// Consume up to and including the closing quote of a single-line
    /// string. Handles `\"` escapes and `\(...)` interpolations.
    fn string_tail(&mut self, start: u32) -> Result<(), ParseError> {
        loop {
            match self.cursor.peek() {
                None | Some(b'\n') => return Err(ParseError::UnterminatedString { start }),
                Some(b'"') => {
                    self.cursor.bump();
                    return Ok(());
                }
                Some(b'\\') => {
                    self.cursor.bump();
                    if self.cursor.peek() == Some(b'(') {
                        self.cursor.bump();
                        self.interpolation(start)?;
                    } else {
                        // Escaped character; consume it blindly.
                        self.cursor.bump();
                    }
                }
                Some(_) => self.cursor.bump(),
            }
        }
    }

    /// Consume the body of a `\(...)` interpolation, including the closing
    /// paren. Nested parens and nested string literals are tracked so a
    /// quote inside the interpolation does not end the outer string.
    fn interpolation(&mut self, start: u32) -> Result<(), ParseError> {
        let mut depth: u32 = 1;
        while depth > 0 {
            match self.cursor.peek() {
                None => return Err(ParseError::UnterminatedString { start }),
                Some(b'(') => {
                    self.cursor.bump();
                    depth += 1;
                }
                Some(b')') => {
                    self.cursor.bump();
                    depth -= 1;
                }
                Some(b'"') => {
                    self.cursor.bump();
                    self.string_tail(start)?;
                }
                Some(_) => self.cursor.bump(),
            }
        }
        Ok(())
    }

    /// Consume a multiline string body up to and including the closing
    /// `"""`. Interpolations inside multiline strings contain no `"""`
    /// in practice, so a flat scan for the closing delimiter suffices.
    fn multiline_tail(&mut self, start: u32) -> Result<(), ParseError> {
        loop {
            if !self.cursor.skip_to_byte(b'"') {
                return Err(ParseError::UnterminatedString { start });
            }
            if self.cursor.starts_with(b"\"\"\"") {
                self.cursor.bump_by(3);
                return Ok(());
            }
            self.cursor.bump();
        }
    }

    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.cursor.peek() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => self.cursor.bump(),
                Some(b'/') if self.cursor.peek_at(1) == Some(b'/') => {
                    // Line comment: runs to the newline, which stays trivia.
                    self.cursor.skip_to_byte(b'\n');
                }
                Some(b'/') if self.cursor.peek_at(1) == Some(b'*') => {
                    self.block_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Nesting block comment. The cursor sits on the opening `/*`.
    fn block_comment(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.pos();
        self.cursor.bump_by(2);
        let mut depth: u32 = 1;
        while depth > 0 {
            match (self.cursor.peek(), self.cursor.peek_at(1)) {
                (None, _) => return Err(ParseError::UnterminatedComment { start }),
                (Some(b'/'), Some(b'*')) => {
                    self.cursor.bump_by(2);
                    depth += 1;
                }
                (Some(b'*'), Some(b'/')) => {
                    self.cursor.bump_by(2);
                    depth -= 1;
                }
                _ => self.cursor.bump(),
            }
        }
        Ok(())
    }
}
