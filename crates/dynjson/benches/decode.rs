//! Benchmark – full-buffer decode throughput.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dynjson::{from_slice, DecodeOptions};

/// A deterministic array of numeric scalars, at least `target_len` bytes.
fn number_payload(target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + 16);
    s.push('[');
    let mut i = 0u64;
    while s.len() < target_len {
        if i > 0 {
            s.push(',');
        }
        s.push_str(&format!("{}.{}", i * 37 % 100_000, i % 997));
        i += 1;
    }
    s.push(']');
    s
}

/// A deterministic object of string members, roughly half of them carrying
/// escapes.
fn string_payload(target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + 32);
    s.push('{');
    let mut i = 0u64;
    while s.len() < target_len {
        if i > 0 {
            s.push(',');
        }
        if i % 2 == 0 {
            s.push_str(&format!("\"key{i}\":\"plain text value {i}\""));
        } else {
            s.push_str(&format!("\"key{i}\":\"escaped\\tvalue\\n{i}\""));
        }
        i += 1;
    }
    s.push('}');
    s
}

fn bench_decode(c: &mut Criterion) {
    let payloads = [
        ("numbers", number_payload(64 * 1024)),
        ("strings", string_payload(64 * 1024)),
    ];

    let mut group = c.benchmark_group("decode");
    for (name, payload) in &payloads {
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("float", name), payload, |b, p| {
            b.iter(|| from_slice(black_box(p.as_bytes()), DecodeOptions::default()).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("int64", name), payload, |b, p| {
            let options = DecodeOptions {
                use_int64: true,
                ..Default::default()
            };
            b.iter(|| from_slice(black_box(p.as_bytes()), options).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("number", name), payload, |b, p| {
            let options = DecodeOptions {
                use_number: true,
                ..Default::default()
            };
            b.iter(|| from_slice(black_box(p.as_bytes()), options).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
