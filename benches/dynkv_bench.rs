use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dynkv::{Engine, Item, MemoryTable, Operation, Table};
use rand::{distributions::Alphanumeric, Rng};

fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn bench_set_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_many");

    for size in [10, 100, 1000] {
        let pairs: Vec<String> = (0..size)
            .map(|i| format!("key_{}={}", i, random_string(32)))
            .collect();
        let op = Operation::Set { pairs };

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &op, |b, op| {
            b.iter_batched(
                || Engine::new(MemoryTable::new()),
                |mut engine| {
                    let mut out = Vec::new();
                    engine.execute(op, &mut out).unwrap();
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for size in [100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut table = MemoryTable::new();
                    for i in 0..size {
                        table
                            .put(&Item::new(format!("key_{}", i), random_string(64)))
                            .unwrap();
                    }
                    Engine::new(table)
                },
                |mut engine| {
                    let mut out = Vec::with_capacity(size * 80);
                    engine.execute(&Operation::Scan, &mut out).unwrap();
                    black_box(out);
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_parse_pair(c: &mut Criterion) {
    let token = format!("key={}", "a=b;".repeat(64));
    c.bench_function("parse_pair", |b| {
        b.iter(|| Item::parse_pair(black_box(&token)).unwrap())
    });
}

criterion_group!(benches, bench_set_many, bench_scan, bench_parse_pair);
criterion_main!(benches);
