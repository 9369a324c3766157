//! Forward-only cursor over a sentinel-terminated buffer.
//!
//! The cursor tracks one position. The byte at that position is `current`,
//! the byte after it is the one-byte lookahead (`peek`), and the read
//! position is always `pos + 1`. Once the position reaches the source
//! length, `current` is the `0x00` sentinel and [`advance`](Cursor::advance)
//! stops moving: end of input saturates rather than running into padding.
//!
//! # Interior Null Bytes
//!
//! A `0x00` byte inside the source reads the same as the sentinel. The
//! cursor distinguishes the two by comparing `pos` against `source_len`.

use std::borrow::Cow;

/// Forward-only cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf[source_len]` and `buf[source_len + 1]` are `0x00`, and
/// `pos <= source_len`. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction and by `advance`
/// saturating at `source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 1 < buf.len(),
            "sentinel and lookahead byte must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current without consuming it.
    ///
    /// Returns `0x00` at and just before end of input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance by one byte. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Offset of the next byte to read. Always `pos() + 1`.
    #[inline]
    pub fn read_pos(&self) -> u32 {
        self.pos + 1
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract source text between two offsets.
    ///
    /// Borrows when the bytes are valid UTF-8, which always holds for ranges
    /// bounded by ASCII delimiters in text that came from a `&str`. Invalid
    /// sequences (raw byte input) are replaced with U+FFFD.
    pub fn slice(&self, start: u32, end: u32) -> Cow<'a, str> {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        String::from_utf8_lossy(&self.buf[start as usize..end as usize])
    }

    /// Extract source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> Cow<'a, str> {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop. All the
    /// classification predicates the scanner uses satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Skip spaces, tabs, newlines and carriage returns.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Skip space bytes only.
    #[inline]
    pub fn skip_spaces(&mut self) {
        self.eat_while(|b| b == b' ');
    }

    /// Advance to the next `\n` byte, or to end of input if there is none.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr(b'\n', self.remaining());
        self.jump(found);
    }

    /// Advance to the next space byte, or to end of input if there is none.
    pub fn eat_until_space_or_eof(&mut self) {
        let found = memchr::memchr(b' ', self.remaining());
        self.jump(found);
    }

    /// Advance to the next `"` or `'` byte, or to end of input.
    ///
    /// Either quote closes a run regardless of which one opened it.
    pub fn eat_until_quote_or_eof(&mut self) {
        let found = memchr::memchr2(b'"', b'\'', self.remaining());
        self.jump(found);
    }

    /// Unconsumed source content (excludes sentinel and padding).
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Move forward by a `remaining()`-relative offset, or to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining().len() <= source_len which fits in u32"
    )]
    fn jump(&mut self, offset: Option<usize>) {
        match offset {
            Some(off) => self.pos += off as u32,
            None => self.pos = self.source_len,
        }
    }
}
