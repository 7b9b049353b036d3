use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

use ferroblis::{dot, gemm_into, GemmOptions, Matrix};

/// Performs 100 matrix mulitplications on a 256x256 matrix
pub fn matmul_100_256(init: &[f64], nthreads: isize) -> Vec<f64> {
    let mut a = Matrix::from_shape([256, 256], init.to_vec());
    let b = Matrix::from_shape([256, 256], init.to_vec());
    let mut c = Matrix::from_shape([256, 256], init.to_vec());

    let opts = GemmOptions::default().with_nthreads(nthreads);
    for _ in 0..100 {
        gemm_into(&a, &b, &mut c, &opts).unwrap();
        std::mem::swap(&mut a, &mut c);
    }

    c.into_inner()
}

pub fn matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    let mut init = vec![0.0f64; 256 * 256];
    init[1] = 0.001;
    for i in 0..256 {
        let i = i * 256 + i; // diagonals
        init[i] = 1.0;
    }

    for nthreads in [1, 4] {
        group.bench_function(format!("gemm/{nthreads}"), |b: &mut Bencher| {
            b.iter(|| black_box(matmul_100_256(&init, nthreads)));
        });
    }

    // A A^T through the syrk shortcut, against a copy that has to go through gemm
    let a = Matrix::from_shape([256, 256], init.clone());
    let at = Matrix::from_shape([256, 256], a.t().to_vec());
    group.bench_function("dot/shortcut", |b| {
        b.iter(|| black_box(dot(&a, &a.t(), 1).unwrap()));
    });
    group.bench_function("dot/gemm", |b| {
        b.iter(|| black_box(dot(&a, &at, 1).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, matmul);
criterion_main!(benches);
