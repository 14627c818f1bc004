#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: rtmp_url vs the general-purpose url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Rust url crate
use url::Url as UrlCrate;

const TYPICAL_URLS: &[&str] = &[
    "rtmp://live.example.com/live/stream",
    "rtmp://live.example.com:1935/app/instance/stream",
    "rtmpt://tunnel.example.com:80/vod/mp4:clip.mp4?token=abc",
    "rtmps://secure.example.com/ondemand/path/to/file.flv",
    "rtmpe://cdn.example.com/app?slist=a.mp4&b=1",
    "rtmp://10.0.0.1:1935",
];

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let input = "rtmp://example.com/live/stream";

    group.bench_function("rtmp_url", |b| {
        b.iter(|| rtmp_url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");
    let input = "rtmpte://media.example.com:8080/app/instance/sub/path/stream.mp4?token=value&e=1";

    group.bench_function("rtmp_url", |b| {
        b.iter(|| rtmp_url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_typical_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_typical");

    group.bench_function("rtmp_url", |b| {
        b.iter(|| {
            for input in TYPICAL_URLS {
                black_box(rtmp_url::parse(black_box(input)).unwrap());
            }
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for input in TYPICAL_URLS {
                black_box(UrlCrate::parse(black_box(input)).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_stream_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_name");
    let input = "rtmp://example.com/vod/my%20clip.mp4?token=abc";

    group.bench_function("normalize_playpath", |b| {
        b.iter(|| {
            let url = rtmp_url::parse(black_box(input)).unwrap();
            rtmp_url::normalize_playpath(url.playpath()).len()
        });
    });

    group.bench_function("tc_url", |b| {
        b.iter(|| rtmp_url::parse(black_box(input)).unwrap().tc_url());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_parse_typical_all,
    bench_stream_name
);

criterion_main!(benches);
