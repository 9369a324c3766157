//! Lexer for the servo scripting language.
//!
//! Converts source text into the flat token stream the parser consumes:
//!
//! - [`SourceBuffer`] owns the bytes plus a zero sentinel
//! - [`Cursor`] walks the buffer forward one byte at a time
//! - [`Scanner`] classifies bytes into [`Token`]s, one per call
//!
//! Classification is ASCII-only and position-free. Malformed input becomes
//! an `ILLEGAL` token in the stream; [`lex_strict`] and
//! [`Scanner::next_checked`] surface the same cases as [`LexError`].
//!
//! ```
//! use servo_lexer::{lex, TokenKind};
//!
//! let tokens = lex("import map from 'Array';");
//! assert_eq!(tokens[0].kind, TokenKind::Import);
//! assert_eq!(tokens[0].literal, "Array:map");
//! assert_eq!(tokens[1].kind, TokenKind::Semicolon);
//! assert_eq!(tokens[2].kind, TokenKind::Eof);
//! ```

mod cursor;
mod import;
mod lex_error;
mod scanner;
mod source_buffer;

use std::sync::Once;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;
pub use servo_ir::{lookup_ident, Token, TokenKind};
pub use source_buffer::SourceBuffer;

use tracing::debug;

/// Scan a whole source text.
///
/// The returned tokens always end with exactly one `EOF`.
pub fn lex(source: &str) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let tokens: Vec<Token> = Scanner::new(&buf).collect();
    debug!(bytes = buf.len(), tokens = tokens.len(), "lexed source");
    tokens
}

/// Scan a whole source text, stopping at the first malformed token.
///
/// On success the tokens are identical to [`lex`]'s.
pub fn lex_strict(source: &str) -> Result<Vec<Token>, LexError> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buf);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_checked()?;
        let done = tok.is_eof();
        tokens.push(tok);
        if done {
            debug!(bytes = buf.len(), tokens = tokens.len(), "lexed source (strict)");
            return Ok(tokens);
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=servo_lexer=debug` or `RUST_LOG=servo_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed elsewhere keeps priority.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
