use binviz_core::decoder::decode_bytes;
use binviz_core::packed_key::extract_keys;
use binviz_core::point_mapper::map_points;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn sample_bytes(len: usize) -> Vec<u8> {
    // Cheap LCG so the bench input has both repeats and spread.
    let mut state = 0x2545_F491u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 24) as u8
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("Key Extraction");
    for len in [3 * 1_000, 3 * 100_000] {
        let bytes = sample_bytes(len);
        group.bench_with_input(BenchmarkId::new("extract_keys", len), &bytes, |b, bytes| {
            b.iter(|| extract_keys(black_box(bytes)))
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("Point Mapping");
    for len in [3 * 1_000, 3 * 100_000] {
        let keys = extract_keys(&sample_bytes(len));
        group.bench_with_input(BenchmarkId::new("map_points", len), &keys, |b, keys| {
            b.iter(|| map_points(black_box(keys.clone())))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let bytes = sample_bytes(3 * 100_000);
    c.bench_function("decode_bytes_300k", |b| {
        b.iter(|| decode_bytes(black_box(bytes.clone())))
    });
}

criterion_group!(benches, bench_extract, bench_map, bench_decode);
criterion_main!(benches);
