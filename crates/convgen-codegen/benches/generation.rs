//! Performance benchmarks for convgen-codegen.
//!
//! Tests corpus generation performance across different example counts.
//!
//! Run with: cargo bench --package convgen-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use convgen_codegen::Generator;
use convgen_core::GeneratorConfig;
use std::hint::black_box;

fn bench_generation(c: &mut Criterion) {
    let generator = Generator::new().unwrap();

    let mut group = c.benchmark_group("corpus_generation");
    for count in [1, 10, 100, 300, 1000] {
        let config = GeneratorConfig {
            count,
            ..Default::default()
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            b.iter(|| {
                let code = generator.generate(black_box(config)).unwrap();
                black_box(code)
            });
        });
    }
    group.finish();
}

fn bench_generator_setup(c: &mut Criterion) {
    c.bench_function("generator_new", |b| {
        b.iter(|| black_box(Generator::new().unwrap()));
    });
}

criterion_group!(benches, bench_generation, bench_generator_setup);
criterion_main!(benches);
