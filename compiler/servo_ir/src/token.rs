//! Token types for the servo lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal text the scanner
//! produced for it. Tokens carry no position; the scanner is a plain
//! forward stream and the parser consumes tokens in order.

use std::fmt;

/// Token kinds for servo.
///
/// The set is closed. Keyword kinds are produced only through
/// [`lookup_ident`](crate::lookup_ident); every other kind is produced
/// directly by the scanner's byte dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Slash,
    Asterisk,
    Modulo,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,

    // Delimiters
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,

    // Literals and runs
    String,
    Comment,
    /// `import <binding> from '<module>'`, literal is `"<module>:<binding>"`.
    Import,
    Int,
    Ident,

    // Keywords
    Function, // fn
    Let,
    Const,
    True,
    False,
    If,
    Else,
    Return,
    While,
    For,
    In,
    Break,
    Continue,
    Null,
    Class,
    New,
    This,

    /// Malformed input. The literal is the offending byte.
    Illegal,
    Eof,
}

impl TokenKind {
    /// Stable upper-case name of the kind, e.g. `NOT_EQ`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Slash => "SLASH",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Modulo => "MODULO",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTE",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTE",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Import => "IMPORT",
            TokenKind::Int => "INT",
            TokenKind::Ident => "IDENT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::In => "IN",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Null => "NULL",
            TokenKind::Class => "CLASS",
            TokenKind::New => "NEW",
            TokenKind::This => "THIS",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns the fixed source spelling for kinds that have exactly one.
    ///
    /// Returns `None` for kinds whose literal varies (strings, identifiers,
    /// numbers, comments, imports, `Illegal`, `Eof`).
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Modulo => "%",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Null => "null",
            TokenKind::Class => "class",
            TokenKind::New => "new",
            TokenKind::This => "this",
            TokenKind::String
            | TokenKind::Comment
            | TokenKind::Import
            | TokenKind::Int
            | TokenKind::Ident
            | TokenKind::Illegal
            | TokenKind::Eof => return None,
        };
        Some(text)
    }

    /// Returns `true` for reserved keyword kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::Const
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::While
                | TokenKind::For
                | TokenKind::In
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Null
                | TokenKind::Class
                | TokenKind::New
                | TokenKind::This
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified unit of source text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The terminal token. Its literal is always empty.
    pub fn eof() -> Self {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.literal)
    }
}
