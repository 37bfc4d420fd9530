//! Chromatic adaptation and conversion benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxcolor_core::{
    ChromaticAdaptation, ColorSpaceConverter, D50, D65, Lab, LmsAdaptationMatrix, Rgb,
    VonKriesAdaptation, Xyz,
};

fn generate_xyz_data(count: usize) -> Vec<Xyz> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Xyz::new(t * 0.95, (t * 2.0) % 1.0, (t * 3.0) % 1.09)
        })
        .collect()
}

fn generate_rgb_data(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Rgb::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

// ============================================================================
// Adaptation
// ============================================================================

fn bench_adapt_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapt_single");
    let color = Xyz::new(0.4, 0.3, 0.2);

    for preset in [LmsAdaptationMatrix::Bradford, LmsAdaptationMatrix::Cat02] {
        let engine = VonKriesAdaptation::from_preset(preset);
        group.bench_function(preset.name(), |b| {
            b.iter(|| engine.transform(black_box(color), black_box(D65.xyz), black_box(D50.xyz)))
        });
    }

    let engine = VonKriesAdaptation::new();
    group.bench_function("equal_whites", |b| {
        b.iter(|| engine.transform(black_box(color), black_box(D65.xyz), black_box(D65.xyz)))
    });

    group.finish();
}

fn bench_adapt_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapt_batch");
    let engine = VonKriesAdaptation::new();

    for size in [100, 1000, 10000, 100000].iter() {
        let input = generate_xyz_data(*size);
        let mut output = vec![Xyz::default(); *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("slice", size), size, |b, _| {
            b.iter(|| {
                engine
                    .transform_slice(black_box(&input), &mut output, D65.xyz, D50.xyz)
                    .ok()
            })
        });

        group.bench_with_input(BenchmarkId::new("per_element", size), size, |b, _| {
            b.iter(|| {
                for (src, dst) in input.iter().zip(output.iter_mut()) {
                    *dst = engine.transform(black_box(*src), D65.xyz, D50.xyz);
                }
            })
        });
    }

    group.finish();
}

// ============================================================================
// Conversion
// ============================================================================

fn bench_convert_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_lab");
    let converter = ColorSpaceConverter::default();

    for size in [1000, 100000].iter() {
        let input = generate_rgb_data(*size);
        let mut output = vec![Lab::default(); *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), size, |b, _| {
            b.iter(|| converter.convert_slice(black_box(&input), &mut output).ok())
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| {
                converter
                    .par_convert_slice(black_box(&input), &mut output)
                    .ok()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_adapt_single, bench_adapt_batch, bench_convert_batch);
criterion_main!(benches);
