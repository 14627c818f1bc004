/// Errors that can occur during RTMP URL parsing
///
/// Only structural failures are errors. Anomalies such as an unknown scheme
/// name, an oversized hostname or an out-of-range port degrade the affected
/// field and are reported through the `log` facade instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No `://` delimiter in the input
    MissingScheme,
    /// Nothing follows the `://` delimiter
    EmptyHost,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingScheme => "No :// in url",
            Self::EmptyHost => "No hostname in url",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for RTMP URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
