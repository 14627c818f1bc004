#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Basic RTMP URL parsing tests
///
/// This test suite covers:
/// - Scheme detection and the unknown-scheme fallback
/// - Host, port, app and playpath extraction
/// - The `ondemand` and `slist=` app conventions
/// - Graceful degradation on malformed input
use rtmp_url::{ParseError, ParsedUrl, Protocol};

fn parse(input: &str) -> Result<ParsedUrl<'_>, ParseError> {
    rtmp_url::parse(input)
}

fn is_subslice(outer: &str, inner: &str) -> bool {
    let outer_start = outer.as_ptr() as usize;
    let inner_start = inner.as_ptr() as usize;
    inner_start >= outer_start && inner_start + inner.len() <= outer_start + outer.len()
}

#[test]
fn test_missing_scheme_fails() {
    for input in [
        "",
        "example.com",
        "rtmp:/example.com/app",
        "rtmp//example.com/app",
        "rtmp:example.com:1935/app/stream",
        "/live/stream",
    ] {
        assert_eq!(parse(input).unwrap_err(), ParseError::MissingScheme, "{input}");
    }
}

#[test]
fn test_empty_host_fails() {
    assert_eq!(parse("rtmp://").unwrap_err(), ParseError::EmptyHost);
    assert_eq!(parse("foo://").unwrap_err(), ParseError::EmptyHost);
    assert_eq!(parse("://").unwrap_err(), ParseError::EmptyHost);
}

#[test]
fn test_full_url() {
    let url = parse("rtmp://host:1935/app/instance/stream").unwrap();
    assert_eq!(url.protocol(), Protocol::Rtmp);
    assert_eq!(url.host(), "host");
    assert_eq!(url.port(), 1935);
    assert_eq!(url.app(), "app/instance");
    assert_eq!(url.playpath(), "stream");
}

#[test]
fn test_scheme_case_insensitive() {
    let upper = parse("RTMP://h/a/p").unwrap();
    let lower = parse("rtmp://h/a/p").unwrap();
    assert_eq!(upper.protocol(), lower.protocol());
    assert_eq!(upper.host(), lower.host());
    assert_eq!(upper.port(), lower.port());
    assert_eq!(upper.app(), lower.app());
    assert_eq!(upper.playpath(), lower.playpath());
    assert_eq!(upper.components(), lower.components());
}

#[test]
fn test_all_protocols() {
    let cases = [
        ("rtmp", Protocol::Rtmp),
        ("rtmpt", Protocol::Rtmpt),
        ("rtmps", Protocol::Rtmps),
        ("rtmpe", Protocol::Rtmpe),
        ("rtmfp", Protocol::Rtmfp),
        ("rtmpte", Protocol::Rtmpte),
        ("rtmpts", Protocol::Rtmpts),
        ("RtmpTS", Protocol::Rtmpts),
    ];
    for (scheme, expected) in cases {
        let input = format!("{scheme}://example.com/live/stream");
        let url = parse(&input).unwrap();
        assert_eq!(url.protocol(), expected, "{input}");
        assert_eq!(url.host(), "example.com");
    }
}

#[test]
fn test_unknown_scheme_defaults_to_rtmp() {
    let url = parse("http://example.com/live/stream").unwrap();
    assert_eq!(url.protocol(), Protocol::Rtmp);
    assert_eq!(url.host(), "example.com");
    assert_eq!(url.app(), "live");
    assert_eq!(url.playpath(), "stream");

    // Empty scheme name is also just unknown
    let url = parse("://example.com/live").unwrap();
    assert_eq!(url.protocol(), Protocol::Rtmp);
    assert_eq!(url.host(), "example.com");
}

#[test]
fn test_oversized_host() {
    let host = "a".repeat(256);
    let input = format!("rtmp://{host}:1935/app/stream");
    let url = parse(&input).unwrap();
    assert_eq!(url.host(), "");
    assert_eq!(url.port(), 1935);
    assert_eq!(url.app(), "app");
    assert_eq!(url.playpath(), "stream");

    // 255 is still accepted
    let host = "b".repeat(255);
    let input = format!("rtmp://{host}/app/stream");
    let url = parse(&input).unwrap();
    assert_eq!(url.host(), host);
}

#[test]
fn test_ondemand() {
    let url = parse("rtmp://host/ondemand/foo/bar").unwrap();
    assert_eq!(url.app(), "ondemand");
    assert_eq!(url.app().len(), 8);
    assert_eq!(url.playpath(), "foo/bar");

    // Deep ondemand paths are not split into app instances
    let url = parse("rtmp://host/ondemand/a/b/c/d").unwrap();
    assert_eq!(url.app(), "ondemand");
    assert_eq!(url.playpath(), "a/b/c/d");

    // Case-sensitive literal
    let url = parse("rtmp://host/OnDemand/foo/bar").unwrap();
    assert_eq!(url.app(), "OnDemand/foo");
    assert_eq!(url.playpath(), "bar");
}

#[test]
fn test_slist() {
    let url = parse("rtmp://host/app?slist=stream1").unwrap();
    assert_eq!(url.app(), "app");
    assert_eq!(url.playpath(), "?slist=stream1");
    assert_eq!(url.components().app.end(), url.components().playpath.start);

    // slist takes priority over ondemand
    let url = parse("rtmp://host/ondemand/x?slist=a").unwrap();
    assert_eq!(url.app(), "ondemand/x");
    assert_eq!(url.playpath(), "?slist=a");

    // slist= without '?' is not the marker
    let url = parse("rtmp://host/app/slist=a").unwrap();
    assert_eq!(url.app(), "app");
    assert_eq!(url.playpath(), "slist=a");
}

#[test]
fn test_no_path() {
    let url = parse("rtmp://host:80").unwrap();
    assert_eq!(url.host(), "host");
    assert_eq!(url.port(), 80);
    assert_eq!(url.app(), "");
    assert_eq!(url.playpath(), "");
}

#[test]
fn test_trailing_slash() {
    let url = parse("rtmp://host/").unwrap();
    assert_eq!(url.app(), "");
    assert_eq!(url.playpath(), "");

    let url = parse("rtmp://host/app/").unwrap();
    assert_eq!(url.app(), "app");
    assert_eq!(url.playpath(), "");
}

#[test]
fn test_out_of_range_port() {
    let url = parse("rtmp://host:99999/app/stream").unwrap();
    assert_eq!(url.port(), 0);
    assert_eq!(url.effective_port(), 1935);
    assert_eq!(url.app(), "app");
    assert_eq!(url.playpath(), "stream");

    let url = parse("rtmp://host:65535/app").unwrap();
    assert_eq!(url.port(), 65535);
}

#[test]
fn test_tolerant_port() {
    // Trailing garbage after the digits is ignored
    let url = parse("rtmp://host:80abc/app/stream").unwrap();
    assert_eq!(url.port(), 80);
    assert_eq!(url.app(), "app");

    // Non-numeric and empty ports are 0
    assert_eq!(parse("rtmp://host:abc/app").unwrap().port(), 0);
    assert_eq!(parse("rtmp://host:/app").unwrap().port(), 0);

    // Negative ports are discarded
    assert_eq!(parse("rtmp://host:-1935/app").unwrap().port(), 0);
}

#[test]
fn test_colon_in_path_is_not_a_port() {
    let url = parse("rtmp://host/vod/mp4:clip.mp4").unwrap();
    assert_eq!(url.host(), "host");
    assert_eq!(url.port(), 0);
    assert_eq!(url.app(), "vod");
    assert_eq!(url.playpath(), "mp4:clip.mp4");
}

#[test]
fn test_empty_host_before_path() {
    // A path right after :// leaves the host empty without failing
    let url = parse("rtmp:///app/stream").unwrap();
    assert_eq!(url.host(), "");
    assert_eq!(url.app(), "app");
    assert_eq!(url.playpath(), "stream");
}

#[test]
fn test_app_depth() {
    let url = parse("rtmp://host/app").unwrap();
    assert_eq!(url.app(), "app");
    assert_eq!(url.playpath(), "");

    let url = parse("rtmp://host/a/b/c/d").unwrap();
    assert_eq!(url.app(), "a/b/c");
    assert_eq!(url.playpath(), "d");

    let url = parse("rtmp://host/a/b/c/d/e/f").unwrap();
    assert_eq!(url.app(), "a/b/c");
    assert_eq!(url.playpath(), "d/e/f");
}

#[test]
fn test_views_are_subslices_of_input() {
    let input = String::from("rtmpe://media.example.com:1936/live/inst/stream?key=1");
    let url = parse(&input).unwrap();
    assert!(is_subslice(&input, url.host()));
    assert!(is_subslice(&input, url.app()));
    assert!(is_subslice(&input, url.playpath()));

    let c = url.components();
    assert_eq!(&input[c.host.start..c.host.end()], url.host());
    assert_eq!(&input[c.app.start..c.app.end()], url.app());
    assert_eq!(&input[c.playpath.start..c.playpath.end()], url.playpath());
    assert!(c.host.end() <= c.app.start);
    assert!(c.app.end() <= c.playpath.start);
    assert!(c.playpath.end() <= input.len());
}

#[test]
fn test_parse_is_deterministic() {
    let input = "rtmpt://host:8080/ondemand/a/b?x";
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn test_non_ascii_input() {
    let url = parse("rtmp://hôte.example/äpp/strëam").unwrap();
    assert_eq!(url.host(), "hôte.example");
    assert_eq!(url.app(), "äpp");
    assert_eq!(url.playpath(), "strëam");
}

#[test]
fn test_tc_url() {
    let url = parse("rtmpts://example.com/app/inst/stream").unwrap();
    assert_eq!(url.tc_url(), "rtmpts://example.com:443/app/inst");

    let url = parse("foo://example.com:1940/live").unwrap();
    assert_eq!(url.tc_url(), "rtmp://example.com:1940/live");
}

#[test]
fn test_can_parse() {
    assert!(ParsedUrl::can_parse("rtmp://host"));
    assert!(!ParsedUrl::can_parse("rtmp://"));
    assert!(!ParsedUrl::can_parse("host/app"));
}

#[test]
fn test_parse_across_threads() {
    let inputs = [
        "rtmp://a:1/x/y",
        "rtmpt://b:2/ondemand/z",
        "rtmps://c:3/app?slist=s",
    ];
    let handles: Vec<_> = inputs
        .iter()
        .map(|&input| std::thread::spawn(move || parse(input).map(|url| url.port())))
        .collect();
    let ports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(ports, vec![Ok(1), Ok(2), Ok(3)]);
}
