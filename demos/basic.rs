use rtmp_url::{ParsedUrl, normalize_playpath};

fn main() {
    // Parse a typical RTMP URL
    let url = ParsedUrl::parse("rtmp://example.com:1935/live/inst/my%20clip.mp4?token=abc")
        .expect("Failed to parse URL");

    println!("URL: {url}");
    println!("Protocol: {} (code {})", url.protocol(), url.protocol().code()); // rtmp (code 0)
    println!("Host: {}", url.host()); // example.com
    println!("Port: {}", url.effective_port()); // 1935
    println!("App: {}", url.app()); // live/inst
    println!("Playpath: {}", url.playpath()); // my%20clip.mp4?token=abc
    println!("Stream: {}", normalize_playpath(url.playpath())); // mp4:my clip?token=abc
    println!("tcUrl: {}", url.tc_url()); // rtmp://example.com:1935/live/inst
}
