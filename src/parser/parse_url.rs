/// Zero-copy RTMP URL parser
/// Records (offset, length) spans into the input - never copies or allocates
use log::{debug, error, warn};

use crate::checkers::{is_valid_host_len, parse_port};
use crate::error::{ParseError, Result};
use crate::helpers::{byte_at, find_byte, find_str};
use crate::parsed_url::ParsedUrl;
use crate::scheme::get_protocol;
use crate::types::Protocol;
use crate::url_components::{Span, UrlComponents};

/// Application that carries its real argument in the rest of the path
const ONDEMAND_PREFIX: &str = "ondemand/";
const ONDEMAND_APP_LEN: usize = 8;

/// Query marker that defers stream selection to a `slist=` parameter
const SLIST_MARKER: &str = "slist=";

/// Length of the application span starting at `start` (just after the first
/// path slash).
///
/// Priority chain:
/// 1. `?` plus `slist=` in the remainder: app ends at the `?`
/// 2. remainder starts with `ondemand/`: app is exactly `ondemand`
/// 3. otherwise app ends at the deepest of up to three further slashes
///    (`app[/appinstance][/...]`), or spans the whole remainder if none
fn app_len(input: &str, start: usize) -> usize {
    let end = input.len();

    let ques = find_byte(input, start, b'?');
    if let Some(ques) = ques.filter(|_| find_str(input, start, SLIST_MARKER).is_some()) {
        return ques - start;
    }

    if input[start..].starts_with(ONDEMAND_PREFIX) {
        return ONDEMAND_APP_LEN;
    }

    let slash2 = find_byte(input, start, b'/');
    let slash3 = slash2.and_then(|pos| find_byte(input, pos + 1, b'/'));
    let slash4 = slash3.and_then(|pos| find_byte(input, pos + 1, b'/'));

    slash4.or(slash3).or(slash2).unwrap_or(end) - start
}

/// Parse `scheme://host[:port]/app[/appinstance]/playpath[?query]`
///
/// # Errors
///
/// Returns [`ParseError::MissingScheme`] if the input has no `://`, and
/// [`ParseError::EmptyHost`] if nothing follows it. Every other anomaly is
/// logged and degrades the affected field.
pub fn parse_rtmp_url(input: &str) -> Result<ParsedUrl<'_>> {
    debug!("Parsing...");

    let Some(scheme_end) = find_str(input, 0, "://") else {
        error!("RTMP URL: No :// in url!");
        return Err(ParseError::MissingScheme);
    };

    // Unknown scheme names fall back to plain RTMP
    let protocol = if let Some(protocol) = get_protocol(&input[..scheme_end]) {
        debug!("Parsed protocol: {protocol} ({})", protocol.code());
        protocol
    } else {
        warn!("Unknown protocol: {}", &input[..scheme_end]);
        Protocol::default()
    };

    let end = input.len();
    let mut cursor = scheme_end + 3;
    if cursor >= end {
        error!("No hostname in URL!");
        return Err(ParseError::EmptyHost);
    }

    let mut components = UrlComponents::new();

    // Host runs to the first '/' (or end), cut short by an earlier ':'
    let colon = find_byte(input, cursor, b':');
    let slash = find_byte(input, cursor, b'/');
    let path_start = slash.unwrap_or(end);
    let host_end = colon.filter(|&col| col < path_start).unwrap_or(path_start);
    let host_len = host_end - cursor;

    if is_valid_host_len(host_len) {
        components.host = Span::new(cursor, host_len);
        debug!("Parsed host    : {}", components.host.slice(input));
    } else {
        warn!("Hostname exceeds 255 characters!");
    }
    cursor = host_end;

    if byte_at(input, cursor) == Some(b':') {
        cursor += 1;
        if let Some(port) = parse_port(&input[cursor..]) {
            components.port = port;
            debug!("Parsed port    : {port}");
        } else {
            warn!("Invalid port number!");
        }
    }

    let Some(slash) = slash else {
        warn!("No application or playpath in URL!");
        return Ok(ParsedUrl::new(input, protocol, components));
    };
    cursor = slash + 1;

    let app_len = app_len(input, cursor);
    components.app = Span::new(cursor, app_len);
    debug!("Parsed app     : {}", components.app.slice(input));
    cursor += app_len;

    if byte_at(input, cursor) == Some(b'/') {
        cursor += 1;
    }

    components.playpath = Span::new(cursor, end - cursor);
    debug!("Parsed playpath: {}", components.playpath.slice(input));

    Ok(ParsedUrl::new(input, protocol, components))
}
