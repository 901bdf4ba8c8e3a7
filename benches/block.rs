//! Criterion benchmarks for the block codec.
//!
//! Run with:
//!   cargo bench --bench block

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zyphrax::block::{compress_block, decompress_block, BLOCK_HEADER_SIZE};
use zyphrax::lorem;
use zyphrax::lz77::MatchFinder;

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("block");

    for &size in &[16_384usize, 65_536] {
        let src = lorem::generate(size, 42);
        group.throughput(Throughput::Bytes(size as u64));

        // ── compress at several levels ──────────────────────────────────────
        for &level in &[0u32, 3, 7] {
            let mut mf = MatchFinder::new(level);
            let mut dst = vec![0u8; size + BLOCK_HEADER_SIZE];
            group.bench_with_input(
                BenchmarkId::new(format!("compress_l{level}"), size),
                &src,
                |b, src| b.iter(|| compress_block(&mut mf, src, &mut dst).unwrap()),
            );
        }

        // ── decompress — compress once, then measure decode only ────────────
        {
            let mut mf = MatchFinder::new(3);
            let mut tmp = vec![0u8; size + BLOCK_HEADER_SIZE];
            let n = compress_block(&mut mf, &src, &mut tmp).unwrap();
            let compressed = tmp[..n].to_vec();
            let mut out = vec![0u8; size];

            group.bench_with_input(
                BenchmarkId::new("decompress", size),
                &compressed,
                |b, compressed| b.iter(|| decompress_block(compressed, &mut out).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_block);
criterion_main!(benches);
