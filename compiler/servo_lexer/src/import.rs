//! Import construct recognizer.
//!
//! The scanner recognizes `import <binding> from '<module>'` directly, as a
//! single `IMPORT` token. The recognizer is entered whenever the scanner sees
//! `i` followed by `m` and commits on that prefix: it either produces an
//! [`ImportScan::Import`] or an [`ImportScan::Malformed`], never an ordinary
//! identifier. Bytes consumed on a failed attempt stay consumed.
//!
//! Grammar, with `SP` the space byte and `WS` any of space/tab/CR/LF:
//!
//! ```text
//! import := "import" SP binding SP "from" SP WS* quote module (quote | EOF)
//! binding := any bytes except SP
//! module  := any bytes except quotes
//! quote   := '"' | "'"
//! ```
//!
//! Exactly one space separates the words. A doubled space reads as an empty
//! word, so the next word lands in the wrong slot and recognition fails. A
//! quote after the keyword and any number of spaces fails on that quote.

use std::borrow::Cow;

use tracing::trace;

use crate::cursor::Cursor;

/// Outcome of one import recognition attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ImportScan<'a> {
    /// Well-formed import. The cursor is on the closing quote (or at EOF).
    Import {
        module: Cow<'a, str>,
        binding: Cow<'a, str>,
    },
    /// Recognition failed at `pos`. The cursor is on the failing byte.
    Malformed { byte: Option<u8>, pos: u32 },
}

/// Run the recognizer with the cursor on the leading `i`.
pub(crate) fn scan_import<'a>(cursor: &mut Cursor<'a>) -> ImportScan<'a> {
    debug_assert_eq!(cursor.current(), b'i');
    let start = cursor.pos();

    if read_word(cursor) != "mport" {
        return malformed(cursor, start, "not the import keyword");
    }

    let mut ahead = *cursor;
    ahead.skip_spaces();
    if is_quote(ahead.current()) {
        *cursor = ahead;
        return malformed(cursor, start, "missing binding name");
    }

    let binding = read_word(cursor);
    if read_word(cursor) != "from" {
        return malformed(cursor, start, "expected `from`");
    }

    cursor.skip_whitespace();
    if !is_quote(cursor.current()) {
        return malformed(cursor, start, "expected quoted module path");
    }

    cursor.advance();
    let module_start = cursor.pos();
    cursor.eat_until_quote_or_eof();
    let module = cursor.slice_from(module_start);

    trace!(start, module = %module, binding = %binding, "import recognized");
    ImportScan::Import { module, binding }
}

/// Step over the byte under the cursor, then read up to the next space or
/// end of input.
fn read_word<'a>(cursor: &mut Cursor<'a>) -> Cow<'a, str> {
    cursor.advance();
    let start = cursor.pos();
    cursor.eat_until_space_or_eof();
    cursor.slice_from(start)
}

fn malformed<'a>(cursor: &Cursor<'a>, start: u32, reason: &'static str) -> ImportScan<'a> {
    let pos = cursor.pos();
    let byte = (!cursor.is_eof()).then(|| cursor.current());
    trace!(start, pos, reason, "import recognition failed");
    ImportScan::Malformed { byte, pos }
}

#[inline]
fn is_quote(byte: u8) -> bool {
    byte == b'"' || byte == b'\''
}
