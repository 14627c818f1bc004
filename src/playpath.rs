use crate::compat::{Cow, String};
use crate::helpers::{find_byte, find_str};
use percent_encoding::percent_decode_str;

const SLIST_MARKER: &str = "slist=";

/// Stream named by a `?...slist=<stream>[&...]` playpath
///
/// Returns `None` unless the playpath starts with `?` and carries `slist=`.
///
/// ```
/// use rtmp_url::slist_stream;
///
/// assert_eq!(slist_stream("?slist=clip.mp4&x=1"), Some("clip.mp4"));
/// assert_eq!(slist_stream("clip.mp4"), None);
/// ```
pub fn slist_stream(playpath: &str) -> Option<&str> {
    if !playpath.starts_with('?') {
        return None;
    }
    let start = find_str(playpath, 0, SLIST_MARKER)? + SLIST_MARKER.len();
    let end = find_byte(playpath, start, b'&').unwrap_or(playpath.len());
    Some(&playpath[start..end])
}

/// Media-type prefix and whether the 4-byte extension is dropped
fn extension_rewrite(ext: &str, from_slist: bool) -> (&'static str, bool) {
    match ext {
        ".f4v" | ".mp4" => ("mp4:", true),
        // Only the URL path loses .flv, slist= names keep it
        ".flv" if !from_slist => ("", true),
        ".mp3" => ("mp3:", true),
        _ => ("", false),
    }
}

fn decode(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

/// Turn a URL playpath into the stream name sent in a play request.
///
/// - `?slist=` playpaths are reduced to the `slist` value
/// - `.mp4`/`.f4v` become an `mp4:` prefix, `.mp3` an `mp3:` prefix, unless
///   the name already carries that prefix
/// - `.flv` is dropped, except on `slist` names
/// - `%XX` escapes are decoded
///
/// The extension is the four bytes before the first `?` of the name, or its
/// last four bytes when there is no query.
///
/// ```
/// use rtmp_url::normalize_playpath;
///
/// assert_eq!(normalize_playpath("clips/intro.mp4"), "mp4:clips/intro");
/// assert_eq!(normalize_playpath("live.flv?token=1"), "live?token=1");
/// assert_eq!(normalize_playpath("?slist=song.mp3"), "mp3:song");
/// ```
pub fn normalize_playpath(playpath: &str) -> Cow<'_, str> {
    let (name, from_slist) = match slist_stream(playpath) {
        Some(stream) => (stream, true),
        None => (playpath, false),
    };

    let ext_end = find_byte(name, 0, b'?').unwrap_or(name.len());
    let Some(ext_start) = ext_end.checked_sub(4) else {
        return decode(name);
    };
    let Some(ext) = name.get(ext_start..ext_end) else {
        return decode(name);
    };

    let (prefix, strip) = extension_rewrite(ext, from_slist);
    if !strip || (!prefix.is_empty() && name.starts_with(prefix)) {
        return decode(name);
    }

    let mut stream = String::with_capacity(prefix.len() + name.len() - ext.len());
    stream.push_str(prefix);
    stream.push_str(&name[..ext_start]);
    stream.push_str(&name[ext_end..]);

    match decode(&stream) {
        Cow::Borrowed(_) => Cow::Owned(stream),
        Cow::Owned(decoded) => Cow::Owned(decoded),
    }
}
