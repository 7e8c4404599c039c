use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lifegrid::GridEngine;

fn make_engine(size: i32) -> GridEngine {
    let mut engine = GridEngine::new(size, size).expect("positive size");
    for y in 0..size {
        for x in 0..size {
            if (x + y) % 3 == 0 {
                engine.toggle(x, y).expect("in bounds");
            }
        }
    }
    engine
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for size in [64, 128, 256] {
        let engine = make_engine(size);

        group.bench_with_input(BenchmarkId::new("serial", size), &engine, |b, engine| {
            b.iter_batched(
                || engine.clone(),
                |mut engine| engine.advance(),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &engine, |b, engine| {
            b.iter_batched(
                || engine.clone(),
                |mut engine| engine.advance_parallel(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
