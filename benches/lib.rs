use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

fn random_data(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rand::thread_rng().fill(&mut data[..]);
    data
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let data = random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(md5_block::compute(black_box(data))))
        });
    }

    group.finish();
}

fn bench_pad(c: &mut Criterion) {
    let mut group = c.benchmark_group("pad");

    for size in [55, 56, 10_000] {
        let data = random_data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(md5_block::pad(black_box(data))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_pad);
criterion_main!(benches);
