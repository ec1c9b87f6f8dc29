//! Benchmarks for color conversion.
//!
//! Run with: `cargo bench -p tricolor-color`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tricolor_color::math::Vec3;
use tricolor_color::{Color, ColorSpace, Conversion};

/// Single colors through the conversion paths.
fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    let srgb = ColorSpace::named("sRGB").unwrap();
    let lin = ColorSpace::named("lin_srgb").unwrap();
    let ap0 = ColorSpace::named("lin_ap0").unwrap();
    let mauve = Color::new(Vec3::new(0.5, 0.25, 0.125), srgb.clone());

    group.bench_function("identity", |b| b.iter(|| black_box(&mauve).convert(&srgb)));
    group.bench_function("curve_only", |b| b.iter(|| black_box(&mauve).convert(&lin)));
    group.bench_function("adapted", |b| b.iter(|| black_box(&mauve).convert(&ap0)));

    let prepared = Conversion::new(&srgb, &ap0);
    group.bench_function("prepared", |b| {
        b.iter(|| prepared.apply(black_box(Vec3::new(0.5, 0.25, 0.125))))
    });

    group.finish();
}

/// Packed RGB buffers of increasing size.
fn bench_buffers(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    let srgb = ColorSpace::named("sRGB").unwrap();
    let acescg = ColorSpace::named("acescg").unwrap();

    for pixels in [1_000usize, 100_000, 1_000_000] {
        let src: Vec<f64> = (0..pixels * 3).map(|i| (i % 255) as f64 / 255.0).collect();
        group.throughput(Throughput::Elements(pixels as u64));
        group.bench_with_input(BenchmarkId::new("srgb_to_acescg", pixels), &src, |b, src| {
            b.iter_batched_ref(
                || src.clone(),
                |buf| srgb.convert_rgb(&acescg, buf),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_buffers);
criterion_main!(benches);
