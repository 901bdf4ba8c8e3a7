//! Criterion benchmarks for the one-shot frame API.
//!
//! Run with:
//!   cargo bench --bench frame

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zyphrax::{compress, compress_bound, decompress, lorem, FrameParams};

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for &size in &[65_536usize, 1 << 20] {
        let src = lorem::generate(size, 7);
        let params = FrameParams::default();
        group.throughput(Throughput::Bytes(size as u64));

        {
            let mut dst = vec![0u8; compress_bound(size)];
            group.bench_with_input(BenchmarkId::new("compress", size), &src, |b, src| {
                b.iter(|| compress(src, &mut dst, &params).unwrap())
            });
        }

        {
            let mut tmp = vec![0u8; compress_bound(size)];
            let n = compress(&src, &mut tmp, &params).unwrap();
            let frame = tmp[..n].to_vec();
            let mut out = vec![0u8; size];

            group.bench_with_input(BenchmarkId::new("decompress", size), &frame, |b, frame| {
                b.iter(|| decompress(frame, &mut out).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
