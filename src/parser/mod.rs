mod parse_url;

pub use parse_url::parse_rtmp_url;

use crate::error::Result;
use crate::parsed_url::ParsedUrl;

/// Parse an RTMP URL string into borrowed components
///
/// # Errors
///
/// Fails only when the input has no `://` or nothing after it.
pub fn parse(input: &str) -> Result<ParsedUrl<'_>> {
    parse_rtmp_url(input)
}
