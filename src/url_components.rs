/// A borrowed region of the input: byte offset and length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end offset
    pub fn end(self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Slice `input` by this span, empty if it does not fit
    pub fn slice(self, input: &str) -> &str {
        input.get(self.start..self.end()).unwrap_or("")
    }
}

/// RTMP URL component offsets into the caller's input
/// Nothing is copied; every field is a span of the original string
///
/// Input: "<rtmp://example.com:1935/live/inst/stream>"
/// - host: (7, 11) "example.com"
/// - port: 1935
/// - app: (24, 9) "live/inst"
/// - playpath: (34, 6) "stream"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlComponents {
    pub host: Span,
    pub port: u16,
    pub app: Span,
    pub playpath: Span,
}

impl UrlComponents {
    /// Create a new `UrlComponents` with all spans empty and port 0
    pub fn new() -> Self {
        Self::default()
    }
}
