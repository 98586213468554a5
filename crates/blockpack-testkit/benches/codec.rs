//! Byte codec benchmarks over realistic block shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockpack_core::rle;
use blockpack_testkit::{enabled_engine, sample_block};

fn bench_rle(c: &mut Criterion) {
    let raw = sample_block(42, 50);
    let compressed = rle::compress(&raw, 6);

    c.bench_function("rle_compress_block", |b| {
        b.iter(|| rle::compress(black_box(&raw), 6))
    });

    c.bench_function("rle_decompress_block", |b| {
        b.iter(|| rle::decompress(black_box(&compressed)))
    });
}

fn bench_engine(c: &mut Criterion) {
    let engine = enabled_engine(6);
    let raw = sample_block(42, 50);
    let framed = engine.encode_block(&raw);

    c.bench_function("engine_encode_block", |b| {
        b.iter(|| engine.encode_block(black_box(&raw)))
    });

    c.bench_function("engine_decode_block", |b| {
        b.iter(|| engine.decode_block(black_box(&framed)).unwrap())
    });
}

criterion_group!(benches, bench_rle, bench_engine);
criterion_main!(benches);
