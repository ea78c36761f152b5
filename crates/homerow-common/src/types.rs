//! Core value types shared between the range parser and the streamer.

/// An inclusive byte window `[start, end]` within a resource.
///
/// A `ByteRange` produced by the range parser always satisfies
/// `start <= end < length` for the resource it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Create a new inclusive range.
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "inverted byte range {start}-{end}");
        Self { start, end }
    }

    /// Number of bytes covered by the range.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Value for the `Content-Range` header of a `206` response.
    pub fn content_range(&self, total: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, total)
    }
}

/// Value for the `Content-Range` header of a `416` response.
pub fn unsatisfied_content_range(total: u64) -> String {
    format!("bytes */{total}")
}
