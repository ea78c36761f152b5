//! Benchmarks for streaming performance.
//!
//! Measures `Range` header parsing and chunked body streaming throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use futures::StreamExt;
use homerow::streaming::{RangeRequest, StreamSession};
use std::io::Cursor;

/// Benchmark range header parsing across the supported forms.
fn bench_range_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_parse");
    let length = 512 * 1024 * 1024;

    for (name, header) in [
        ("closed", Some("bytes=1048576-2097151")),
        ("open_ended", Some("bytes=1048576-")),
        ("suffix", Some("bytes=-65536")),
        ("malformed", Some("bytes=0-10,20-30")),
        ("absent", None),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| RangeRequest::parse(black_box(header), black_box(length)))
        });
    }

    group.finish();
}

/// Benchmark draining a session at various chunk sizes.
fn bench_session_chunks(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("session_chunks");

    let window = 4 * 1024 * 1024;
    let data = vec![0u8; window];

    for chunk_size in [8 * 1024, 64 * 1024, 256 * 1024] {
        group.throughput(Throughput::Bytes(window as u64));
        group.bench_function(format!("drain_{}", chunk_size), |b| {
            b.iter(|| {
                rt.block_on(async {
                    let session = StreamSession::new(
                        Cursor::new(data.as_slice()),
                        0,
                        window as u64,
                        chunk_size,
                    )
                    .commit();
                    let total = session
                        .fold(0usize, |acc, chunk| async move { acc + chunk.unwrap().len() })
                        .await;
                    black_box(total)
                })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_range_parse, bench_session_chunks);
criterion_main!(benches);
