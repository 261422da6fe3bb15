//! Benchmarks for unfold/fold (matricization) operations.
//!
//! Folding a flat vector is the last step of every full Kruskal
//! reconstruction, so it is measured alongside the matrix variants.
//!
//! Run with:
//! ```bash
//! cargo bench -p ktensor-core --bench unfold_fold
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ktensor_core::DenseND;
use scirs2_core::ndarray_ext::{Array1, Array2};
use std::hint::black_box;

fn bench_unfold(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold");

    let test_cases = vec![
        ("3d_small", vec![10, 20, 30]),
        ("3d_medium", vec![50, 60, 70]),
        ("4d_small", vec![10, 10, 10, 10]),
        ("5d_small", vec![5, 10, 15, 20, 25]),
    ];

    for (name, shape) in test_cases {
        let tensor = DenseND::<f64>::ones(&shape);
        let total: usize = shape.iter().product();

        for mode in 0..shape.len() {
            group.throughput(Throughput::Elements(total as u64));
            group.bench_with_input(
                BenchmarkId::new(name, format!("mode_{}", mode)),
                &(&tensor, mode),
                |b, (tensor, mode)| {
                    b.iter(|| black_box(tensor.unfold(black_box(*mode)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    let test_cases = vec![
        ("3d_small_mode0", (vec![10, 600], vec![10, 20, 30], 0)),
        ("3d_small_mode1", (vec![20, 300], vec![10, 20, 30], 1)),
        ("3d_large_mode2", (vec![100, 10000], vec![100, 100, 100], 2)),
        ("4d_small_mode2", (vec![10, 1000], vec![10, 10, 10, 10], 2)),
    ];

    for (name, (matrix_shape, target_shape, mode)) in test_cases {
        let matrix = Array2::<f64>::ones((matrix_shape[0], matrix_shape[1]));
        let total: usize = target_shape.iter().product();

        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(matrix, target_shape.clone(), mode),
            |b, (matrix, target_shape, mode)| {
                b.iter(|| {
                    black_box(
                        DenseND::fold(black_box(matrix), black_box(target_shape), black_box(*mode))
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_fold_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_vec");

    for shape in [vec![20, 20, 20], vec![100, 100, 100], vec![10, 10, 10, 10, 10]] {
        let total: usize = shape.iter().product();
        let flat = Array1::<f64>::ones(total);

        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", shape)),
            &(flat, shape.clone()),
            |b, (flat, shape)| {
                b.iter(|| black_box(DenseND::fold_vec(black_box(flat), shape, 0).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_unfold, bench_fold, bench_fold_vec);
criterion_main!(benches);
