//! Comparison throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use floatdiff::compare::{abs_diff_sum, compare};
use floatdiff::loader::{decode_f32, TrailingBytes};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_buffer(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    // 3 x 85 x 80 x 80 is a yolov5s output head
    for len in [1024usize, 3 * 85 * 80 * 80, 1 << 22] {
        let reference = random_buffer(len, 1);
        let candidate = random_buffer(len, 2);

        group.bench_with_input(BenchmarkId::new("stats", len), &len, |b, _| {
            b.iter(|| black_box(compare(&reference, &candidate).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("sum_only", len), &len, |b, _| {
            b.iter(|| black_box(abs_diff_sum(&reference, &candidate)));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for len in [1024usize, 1 << 22] {
        let bytes: Vec<u8> = random_buffer(len, 3)
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();

        group.bench_with_input(BenchmarkId::new("native", len), &bytes, |b, bytes| {
            b.iter(|| black_box(decode_f32(bytes, TrailingBytes::Truncate).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare, bench_decode);
criterion_main!(benches);
