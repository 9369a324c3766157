//! Servo IR - shared token vocabulary.
//!
//! This crate holds the types that sit between the lexer and the parser:
//! - [`TokenKind`]: the closed set of token classifications
//! - [`Token`]: a kind plus the literal text it was produced from
//! - [`lookup_ident`]: the reserved keyword table
//!
//! It has no dependencies so downstream tools (parser, formatter,
//! highlighter) can use the vocabulary without pulling in the scanner.

mod keywords;
mod token;

pub use keywords::lookup_ident;
pub use token::{Token, TokenKind};
