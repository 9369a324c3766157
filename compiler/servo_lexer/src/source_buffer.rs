//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor reads the sentinel as its current byte once input is
//! exhausted instead of checking bounds. The total buffer size is rounded up
//! to the next 64-byte boundary, leaving at least one further zero byte so
//! [`Cursor::peek`](crate::Cursor::peek) is valid even at end of input.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, immutable source bytes followed by a zero sentinel.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     peek() at EOF lands here
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a buffer from source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer from raw bytes.
    ///
    /// The scanner classifies bytes, not characters, so the content does not
    /// have to be valid UTF-8. Content beyond `u32::MAX - 1` bytes (~4 GiB)
    /// is not scanned.
    pub fn from_bytes(source: &[u8]) -> Self {
        let source_len =
            u32::try_from(source.len()).map_or(u32::MAX - 1, |len| len.min(u32::MAX - 1));
        let content = &source[..source_len as usize];

        // Round up to the next 64-byte boundary, keeping room for the
        // sentinel plus one more zero byte.
        let padded_len = (content.len() + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..content.len()].copy_from_slice(content);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
