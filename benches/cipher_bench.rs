use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dragoncrypt::{decrypt, encrypt};
use std::hint::black_box;

const IV_LEN: usize = 16;
const KEY: u64 = 0x0123_4567_89AB_CDEF;

/// Benchmark encryption throughput across message sizes
fn bench_encrypt_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_throughput");

    // Test sizes from 64 bytes to 1MB
    let sizes = [64, 256, 1024, 4096, 16384, 65536, 262144, 1048576];

    for size in sizes {
        let plaintext = vec![0x42u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &plaintext, |b, pt| {
            b.iter(|| encrypt(black_box(pt), black_box(KEY), black_box(IV_LEN)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark decryption throughput across message sizes
fn bench_decrypt_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt_throughput");

    let sizes = [64, 256, 1024, 4096, 16384, 65536, 262144, 1048576];

    for size in sizes {
        let plaintext = vec![0x42u8; size];
        let ciphertext = encrypt(&plaintext, KEY, IV_LEN).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("decrypt", size), &ciphertext, |b, ct| {
            b.iter(|| decrypt(black_box(ct), black_box(KEY), black_box(IV_LEN)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark small messages where the per-call setup dominates
fn bench_small_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_messages");

    for size in [1, 8, 16, 32] {
        let plaintext = vec![0x42u8; size];

        group.bench_with_input(BenchmarkId::new("roundtrip", size), &plaintext, |b, pt| {
            b.iter(|| {
                let ct = encrypt(black_box(pt), KEY, IV_LEN).unwrap();
                decrypt(black_box(&ct), KEY, IV_LEN).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encrypt_sizes,
    bench_decrypt_sizes,
    bench_small_messages
);
criterion_main!(benches);
