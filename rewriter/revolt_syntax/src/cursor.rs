//! Byte cursor over source text.
//!
//! The cursor advances through the source byte-by-byte; `peek` returns
//! `None` at end of input, so scanning loops terminate without separate
//! bounds checks. Multi-byte UTF-8 sequences are consumed as opaque bytes;
//! the lexer only ever splits the source at ASCII positions, so token
//! boundaries never fall inside a character.

use memchr::memchr;

/// Byte cursor with single-byte lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset.
    ///
    /// Sources larger than `u32::MAX` are not supported; the lexer rejects
    /// them before constructing a cursor.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos as u32
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Byte at the current position, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Byte `n` positions ahead of the current one.
    #[inline]
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    /// Advance one byte. No-op at end of input.
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.bytes.len() {
            self.pos += 1;
        }
    }

    /// Advance `n` bytes, clamped to end of input.
    #[inline]
    pub fn bump_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    /// Whether the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes[self.pos..].starts_with(prefix)
    }

    /// Consume bytes while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance to the next occurrence of `byte` (leaving the cursor on it)
    /// or to end of input. Returns `true` if the byte was found.
    pub fn skip_to_byte(&mut self, byte: u8) -> bool {
        match memchr(byte, &self.bytes[self.pos..]) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.bytes.len();
                false
            }
        }
    }
}
