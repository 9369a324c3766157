use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_unexpected_byte() {
    let err = LexError::unexpected_byte(b'.', 1);
    assert_eq!(err.to_string(), "unexpected byte at byte 1: found '.'");
}

#[test]
fn display_non_printable_byte() {
    let err = LexError::unexpected_byte(0x07, 0);
    assert_eq!(err.to_string(), "unexpected byte at byte 0: found 0x07");
    let err = LexError::unexpected_byte(b' ', 4);
    assert_eq!(err.to_string(), "unexpected byte at byte 4: found 0x20");
}

#[test]
fn display_malformed_import_at_eof() {
    let err = LexError::malformed_import(None, 20, 0);
    assert_eq!(err.to_string(), "malformed import at byte 20: found end of input");
}

#[test]
fn unexpected_byte_starts_where_it_is() {
    let err = LexError::unexpected_byte(b'$', 7);
    assert_eq!(err.start, 7);
    assert_eq!(err.pos, 7);
    assert_eq!(err.kind, LexErrorKind::UnexpectedByte);
}

// === ILLEGAL token conversion ===

#[test]
fn to_token_uses_offending_byte() {
    let tok = LexError::unexpected_byte(b'.', 1).to_token();
    assert_eq!(tok, Token::new(TokenKind::Illegal, "."));
}

#[test]
fn to_token_at_eof_reports_sentinel() {
    let tok = LexError::malformed_import(None, 3, 0).to_token();
    assert_eq!(tok, Token::new(TokenKind::Illegal, "\0"));
}

#[test]
fn byte_literal_mapping() {
    assert_eq!(byte_literal(Some(b' ')), " ");
    assert_eq!(byte_literal(Some(0)), "\0");
    assert_eq!(byte_literal(Some(0xE9)), "\u{e9}");
    assert_eq!(byte_literal(Some(0xFF)), "\u{ff}");
    assert_eq!(byte_literal(None), "\0");
}
