use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use keccak_sponge::{Sha3_256, Shake128, Shake256, Xof, XofReader};

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

fn bench_absorb(c: &mut Criterion) {
    let mut g = c.benchmark_group("absorb");
    for size in SIZES {
        let data = vec![0x5au8; size];
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::new("sha3-256", size), &data, |b, data| {
            b.iter(|| Sha3_256::hash(black_box(data)));
        });
        g.bench_with_input(BenchmarkId::new("shake128", size), &data, |b, data| {
            b.iter(|| {
                let mut xof = Shake128::new();
                xof.update(black_box(data));
                xof.finalize_xof().read_fixed::<32>()
            });
        });
    }
    g.finish();
}

fn bench_squeeze(c: &mut Criterion) {
    let mut g = c.benchmark_group("squeeze");
    for size in SIZES {
        let mut out = vec![0u8; size];
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_function(BenchmarkId::new("shake256", size), |b| {
            b.iter(|| {
                let mut xof = Shake256::new();
                xof.update(b"seed");
                xof.finalize_xof().read(black_box(&mut out));
            });
        });
    }
    g.finish();
}

criterion_group!(benches, bench_absorb, bench_squeeze);
criterion_main!(benches);
