//! Hand-written scanner producing servo tokens.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces one
//! [`Token`] per call. Malformed input is reported in-band as
//! [`TokenKind::Illegal`]; [`Scanner::next_checked`] reports the same cases
//! as [`LexError`] instead.
//!
//! # Design
//!
//! Whitespace is skipped first, then one match on the current byte decides
//! the token. Each arm calls a focused method that leaves the cursor on the
//! first byte after the token. The sentinel byte (`0x00`) at end of input
//! dispatches to `EOF`, which repeats on every later call.

use std::iter::FusedIterator;

use servo_ir::{lookup_ident, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::import::{scan_import, ImportScan};
use crate::lex_error::LexError;
use crate::SourceBuffer;

/// Pull-based scanner over one source buffer.
///
/// Not restartable: build a new scanner to scan the same source again.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Set once the iterator has yielded `EOF`.
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Self::from_cursor(buf.cursor())
    }

    /// Create a scanner starting at the cursor's position.
    pub fn from_cursor(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `EOF` with an empty literal when the source is exhausted.
    /// Subsequent calls after `EOF` continue to return `EOF`.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        self.scan().unwrap_or_else(|err| err.to_token())
    }

    /// Produce the next token, reporting malformed input as an error.
    ///
    /// Returns `Err` exactly where [`next_token`](Self::next_token) would
    /// return an `ILLEGAL` token. The cursor has moved past the failed token
    /// either way, so scanning can continue after an error.
    pub fn next_checked(&mut self) -> Result<Token, LexError> {
        self.scan()
    }

    /// Returns `true` when no source bytes remain.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Current byte offset in the source.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.pos();
        match self.cursor.current() {
            b'+' => Ok(self.single(start, TokenKind::Plus)),
            b'-' => Ok(self.single(start, TokenKind::Minus)),
            b'/' => Ok(self.single(start, TokenKind::Slash)),
            b'*' => Ok(self.single(start, TokenKind::Asterisk)),
            b'%' => Ok(self.single(start, TokenKind::Modulo)),
            b';' => Ok(self.single(start, TokenKind::Semicolon)),
            b',' => Ok(self.single(start, TokenKind::Comma)),
            b'(' => Ok(self.single(start, TokenKind::LParen)),
            b')' => Ok(self.single(start, TokenKind::RParen)),
            b'{' => Ok(self.single(start, TokenKind::LBrace)),
            b'}' => Ok(self.single(start, TokenKind::RBrace)),
            b'[' => Ok(self.single(start, TokenKind::LBracket)),
            b']' => Ok(self.single(start, TokenKind::RBracket)),
            b':' => Ok(self.single(start, TokenKind::Colon)),
            b'=' => Ok(self.with_equal(start, TokenKind::Assign, TokenKind::Eq)),
            b'!' => Ok(self.with_equal(start, TokenKind::Bang, TokenKind::NotEq)),
            b'<' => Ok(self.with_equal(start, TokenKind::Lt, TokenKind::LtEq)),
            b'>' => Ok(self.with_equal(start, TokenKind::Gt, TokenKind::GtEq)),
            b'"' | b'\'' => Ok(self.string()),
            b'#' => Ok(self.comment()),
            b'i' if self.cursor.peek() == b'm' => self.import(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Ok(self.identifier(start)),
            b'0'..=b'9' => Ok(self.number(start)),
            0 if self.cursor.is_eof() => Ok(Token::eof()),
            byte => Err(self.illegal(start, byte)),
        }
    }

    // ─── Operators & Delimiters ─────────────────────────────────────

    #[inline]
    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    /// `=`, `!`, `<`, `>`: the two-byte `X=` form wins whenever the next
    /// byte is `=`.
    fn with_equal(&mut self, start: u32, one: TokenKind, two: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.current() == b'=' {
            self.cursor.advance();
            two
        } else {
            one
        };
        Token::new(kind, self.cursor.slice_from(start))
    }

    // ─── Strings & Comments ─────────────────────────────────────────

    /// Either quote byte closes the string, whichever one opened it. An
    /// unterminated string runs to end of input.
    fn string(&mut self) -> Token {
        self.cursor.advance(); // opening quote
        let body_start = self.cursor.pos();
        self.cursor.eat_until_quote_or_eof();
        let body = self.cursor.slice_from(body_start);
        self.cursor.advance(); // closing quote
        Token::new(TokenKind::String, body)
    }

    /// `#` to end of line. The literal excludes the `#` and the newline;
    /// the newline is consumed.
    fn comment(&mut self) -> Token {
        self.cursor.advance(); // '#'
        let body_start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let body = self.cursor.slice_from(body_start);
        self.cursor.advance(); // '\n'
        Token::new(TokenKind::Comment, body)
    }

    // ─── Identifiers & Numbers ──────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_byte);
        let text = self.cursor.slice_from(start);
        Token::new(lookup_ident(&text), text)
    }

    fn number(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    // ─── Import ─────────────────────────────────────────────────────

    /// Commits on the `im` prefix. Whatever the outcome, the byte the
    /// recognizer stopped on (closing quote or failing byte) is consumed.
    fn import(&mut self, start: u32) -> Result<Token, LexError> {
        let result = scan_import(&mut self.cursor);
        self.cursor.advance();
        match result {
            ImportScan::Import { module, binding } => {
                Ok(Token::new(TokenKind::Import, format!("{module}:{binding}")))
            }
            ImportScan::Malformed { byte, pos } => {
                Err(LexError::malformed_import(byte, pos, start))
            }
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────

    fn illegal(&mut self, start: u32, byte: u8) -> LexError {
        trace!(pos = start, byte, "illegal byte");
        self.cursor.advance();
        LexError::unexpected_byte(byte, start)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EOF`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let tok = self.next_token();
        self.finished = tok.is_eof();
        Some(tok)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Identifier bytes: ASCII letters, `_`, and `'` (so `don't` is one word).
///
/// Digits are not identifier bytes.
#[inline]
fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'\''
}
