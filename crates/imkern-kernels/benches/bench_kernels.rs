use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use imkern_kernels::{
    difference::{difference_of_gaussian_iso, laplacian_of_gaussian_iso},
    gaussian::{gaussian_auto, gaussian_iso},
    gradient::GradientOperator,
    laplacian::Laplacian,
    reflect,
};

fn bench_gaussian(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian");

    for sigma in [0.5, 1.0, 2.0, 4.0, 8.0].iter() {
        let parameter_string = format!("{sigma}");

        group.bench_with_input(
            BenchmarkId::new("gaussian_2d", &parameter_string),
            sigma,
            |b, &sigma| b.iter(|| black_box(gaussian_iso(black_box(sigma)))),
        );

        group.bench_with_input(
            BenchmarkId::new("gaussian_3d", &parameter_string),
            sigma,
            |b, &sigma| b.iter(|| black_box(gaussian_auto(black_box([sigma; 3])))),
        );

        group.bench_with_input(
            BenchmarkId::new("dog_2d", &parameter_string),
            sigma,
            |b, &sigma| b.iter(|| black_box(difference_of_gaussian_iso(black_box(sigma)))),
        );

        group.bench_with_input(
            BenchmarkId::new("log_2d", &parameter_string),
            sigma,
            |b, &sigma| b.iter(|| black_box(laplacian_of_gaussian_iso(black_box(sigma)))),
        );
    }

    group.finish();
}

fn bench_stencils(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stencils");

    for op in GradientOperator::ALL.iter() {
        group.bench_with_input(BenchmarkId::new("gradient", op), op, |b, op| {
            b.iter(|| black_box(op.kernels()))
        });
    }

    let laplacian = Laplacian::new([true; 4]);
    group.bench_function("laplacian_densify_4d", |b| {
        b.iter(|| black_box(laplacian.densify()))
    });

    if let Ok(kernel) = gaussian_auto([2.0, 3.0, 1.5]) {
        group.bench_function("reflect_3d", |b| b.iter(|| black_box(reflect(&kernel))));
    }

    group.finish();
}

criterion_group!(benches, bench_gaussian, bench_stencils);
criterion_main!(benches);
