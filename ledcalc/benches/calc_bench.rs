//! Calculation benchmarks.
//!
//! Catalog lookup across the full range, and the whole demo circuit
//! pipeline including report rendering.

use criterion::{Criterion, criterion_group, criterion_main};
use ledcalc::{CircuitSpec, EfficiencyScenarios, calculate, next_standard_value, select_resistor};
use std::hint::black_box;

fn bench_catalog_lookup(c: &mut Criterion) {
    c.bench_function("next_standard_value_sweep", |b| {
        b.iter(|| {
            let mut ohms = 0.5;
            while ohms < 9_000_000.0 {
                let _ = black_box(next_standard_value(black_box(ohms)));
                ohms *= 1.7;
            }
        });
    });
}

fn bench_select_resistor(c: &mut Criterion) {
    c.bench_function("select_resistor_12v_red", |b| {
        b.iter(|| select_resistor(black_box(12.0), black_box(2.0), black_box(4), black_box(0.02)));
    });
}

fn bench_demo_pipeline(c: &mut Criterion) {
    let spec = CircuitSpec::default();
    let scenarios = EfficiencyScenarios::default();

    c.bench_function("calculate_demo_circuit", |b| {
        b.iter(|| calculate(black_box(&spec), black_box(&scenarios)));
    });

    c.bench_function("render_demo_report", |b| {
        let report = calculate(&spec, &scenarios).expect("demo circuit is valid");
        b.iter(|| black_box(&report).to_string());
    });
}

criterion_group!(
    benches,
    bench_catalog_lookup,
    bench_select_resistor,
    bench_demo_pipeline
);
criterion_main!(benches);
