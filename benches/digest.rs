use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use md5_stream::Md5;

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    // Small message (64 bytes)
    let small = vec![0u8; 64];
    group.throughput(Throughput::Bytes(64));
    group.bench_function("hash_64b", |b| {
        b.iter(|| {
            black_box(Md5::digest(&small));
        });
    });

    // Medium message (1 KB)
    let medium = vec![0u8; 1024];
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("hash_1kb", |b| {
        b.iter(|| {
            black_box(Md5::digest(&medium));
        });
    });

    // Large message (64 KB)
    let large = vec![0u8; 64 * 1024];
    group.throughput(Throughput::Bytes(64 * 1024));
    group.bench_function("hash_64kb", |b| {
        b.iter(|| {
            black_box(Md5::digest(&large));
        });
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    let message = vec![0u8; 1024 * 1024];
    group.throughput(Throughput::Bytes(1024 * 1024));

    // Buffer-aligned chunks take the bypass path.
    group.bench_function("stream_1mb_4kb_chunks", |b| {
        b.iter(|| {
            let mut hasher = Md5::new();
            for chunk in message.chunks(4096) {
                hasher.update(chunk);
            }
            black_box(hasher.finalize());
        });
    });

    // Misaligned chunks keep the holding buffer busy.
    group.bench_function("stream_1mb_63b_chunks", |b| {
        b.iter(|| {
            let mut hasher = Md5::new();
            for chunk in message.chunks(63) {
                hasher.update(chunk);
            }
            black_box(hasher.finalize());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_streaming);
criterion_main!(benches);
