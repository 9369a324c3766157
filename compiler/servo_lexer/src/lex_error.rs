//! Strict-mode lexer errors.
//!
//! The token stream reports malformed input in-band as `ILLEGAL` tokens.
//! [`LexError`] is the same information as an out-of-band value, for callers
//! that use [`Scanner::next_checked`](crate::Scanner::next_checked) or
//! [`lex_strict`](crate::lex_strict) and want to stop at the first problem.
//!
//! Unterminated strings and comments are never errors: they end at end of
//! input by definition.

use std::fmt;

use servo_ir::{Token, TokenKind};

/// A malformed token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at byte {pos}: found {}", describe_byte(.byte))]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// The byte being examined when scanning failed, `None` at end of input.
    pub byte: Option<u8>,
    /// Offset of `byte` (or of end of input).
    pub pos: u32,
    /// Offset where the failed token began.
    pub start: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A byte that starts no token.
    UnexpectedByte,
    /// An `im...` prefix that did not complete `import <binding> from '<module>'`.
    /// The bytes consumed while trying are not rescanned.
    MalformedImport,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedByte => f.write_str("unexpected byte"),
            LexErrorKind::MalformedImport => f.write_str("malformed import"),
        }
    }
}

impl LexError {
    pub fn unexpected_byte(byte: u8, pos: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedByte,
            byte: Some(byte),
            pos,
            start: pos,
        }
    }

    pub fn malformed_import(byte: Option<u8>, pos: u32, start: u32) -> Self {
        LexError {
            kind: LexErrorKind::MalformedImport,
            byte,
            pos,
            start,
        }
    }

    /// The `ILLEGAL` token the permissive stream emits for this error.
    pub fn to_token(&self) -> Token {
        Token::new(TokenKind::Illegal, byte_literal(self.byte))
    }
}

/// Literal text for a single offending byte.
///
/// Each byte maps to the char with the same code point, so `0xE9` reads as
/// `"é"` and the byte value survives. End of input is the sentinel byte and
/// maps to `"\0"`.
pub(crate) fn byte_literal(byte: Option<u8>) -> String {
    char::from(byte.unwrap_or(0)).to_string()
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror format arguments borrow the field"
)]
fn describe_byte(byte: &Option<u8>) -> String {
    match *byte {
        Some(b) if b.is_ascii_graphic() => format!("'{}'", char::from(b)),
        Some(b) => format!("0x{b:02X}"),
        None => "end of input".to_owned(),
    }
}

#[cfg(test)]
mod tests;
