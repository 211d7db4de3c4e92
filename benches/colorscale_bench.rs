use criterion::{Criterion, criterion_group, criterion_main};
use graphs::{named_colorscale, to_hex};
use std::hint::black_box;

fn bench_interpolate_sweep(c: &mut Criterion) {
    let scale = named_colorscale("Viridis").expect("viridis");

    c.bench_function("interpolate_sweep_1k", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let t = f64::from(i) / 999.0;
                let _ = scale.interpolate(black_box(t)).expect("interpolate");
            }
        })
    });
}

fn bench_map_values_100k(c: &mut Criterion) {
    let scale = named_colorscale("Greens").expect("greens");
    let values: Vec<f64> = (0..100_000).map(|i| f64::from(i % 997) * 0.37).collect();

    c.bench_function("map_values_100k", |b| {
        b.iter(|| {
            let _ = scale
                .map_values_auto(black_box(&values))
                .expect("mapping should succeed");
        })
    });
}

fn bench_rgb_string_to_hex(c: &mut Criterion) {
    c.bench_function("rgb_string_to_hex", |b| {
        b.iter(|| {
            let _ = to_hex(black_box("rgb(134, 235, 135)")).expect("to hex");
        })
    });
}

criterion_group!(
    benches,
    bench_interpolate_sweep,
    bench_map_values_100k,
    bench_rgb_string_to_hex
);
criterion_main!(benches);
