//! Reserved keyword table.
//!
//! The scanner hands every identifier spelling to [`lookup_ident`], which
//! resolves it to a keyword kind or to [`TokenKind::Ident`]. The lookup uses
//! the spelling's length as a first-pass filter (keywords are 2-8 bytes),
//! then matches against the keywords of that length.

use crate::TokenKind;

/// Resolve an identifier spelling to its token kind.
///
/// Unrecognized spellings resolve to [`TokenKind::Ident`]. Matching is
/// case-sensitive: `Let` is an identifier.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    if !(2..=8).contains(&text.len()) {
        return TokenKind::Ident;
    }

    match text.len() {
        2 => match text {
            "fn" => TokenKind::Function,
            "if" => TokenKind::If,
            "in" => TokenKind::In,
            _ => TokenKind::Ident,
        },
        3 => match text {
            "let" => TokenKind::Let,
            "for" => TokenKind::For,
            "new" => TokenKind::New,
            _ => TokenKind::Ident,
        },
        4 => match text {
            "true" => TokenKind::True,
            "else" => TokenKind::Else,
            "null" => TokenKind::Null,
            "this" => TokenKind::This,
            _ => TokenKind::Ident,
        },
        5 => match text {
            "const" => TokenKind::Const,
            "false" => TokenKind::False,
            "while" => TokenKind::While,
            "break" => TokenKind::Break,
            "class" => TokenKind::Class,
            _ => TokenKind::Ident,
        },
        6 => match text {
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        },
        8 => match text {
            "continue" => TokenKind::Continue,
            _ => TokenKind::Ident,
        },
        _ => TokenKind::Ident,
    }
}
