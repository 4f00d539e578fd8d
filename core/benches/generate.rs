use criterion::{Criterion, criterion_group, criterion_main};
use kioku_core::*;
use std::hint::black_box;

fn configs() -> [(&'static str, GridConfig); 3] {
    [
        ("standard", GridConfig::STANDARD),
        ("dense", GridConfig::new((14, 8), 100)),
        ("large", GridConfig::new((64, 64), 2048)),
    ]
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in configs() {
        group.bench_function(name, |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomAnswerGenerator::new(seed).generate(black_box(config)))
            })
        });
    }
    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    for (name, config) in configs() {
        let mut engine = MemoryEngine::new(config);
        if let Err(err) = engine.regenerate(RandomAnswerGenerator::new(1)) {
            panic!("generation failed: {err}");
        }
        for index in (0..config.total_cells()).step_by(2) {
            if let Err(err) = engine.set_selected(index, true) {
                panic!("selecting cell {index} failed: {err}");
            }
        }
        group.bench_function(name, |b| b.iter(|| black_box(engine.compute_score())));
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_score);
criterion_main!(benches);
