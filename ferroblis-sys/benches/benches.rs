use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};
use ferroblis_sys::{MatrixOp, Rntm, Uplo, BLAS3};

const N: usize = 256;

fn init() -> Vec<f64> {
    let mut init = vec![0.0f64; N * N];
    init[1] = 0.001;
    for i in 0..N {
        let i = i * N + i; // diagonals
        init[i] = 1.0;
    }
    init
}

/// Performs 100 matrix multiplications on a 256x256 matrix
pub fn matmul_100_256(init: &[f64], rntm: Rntm) -> Vec<f64> {
    let mut a = init.to_vec();
    let b = init.to_vec();
    let mut c = init.to_vec();

    for _ in 0..100 {
        unsafe {
            f64::gemm(
                rntm,
                MatrixOp::NoTrans,
                MatrixOp::NoTrans,
                N,
                N,
                N,
                1.,
                a.as_ptr(),
                1,
                N as isize,
                b.as_ptr(),
                1,
                N as isize,
                0.,
                c.as_mut_ptr(),
                1,
                N as isize,
            );
        }
        std::mem::swap(&mut a, &mut c);
    }

    c
}

/// One rank-256 update of the lower triangle, then the mirror
pub fn syrk_mksymm_256(init: &[f64], rntm: Rntm) -> Vec<f64> {
    let mut c = vec![0.0f64; N * N];
    unsafe {
        f64::syrk(
            rntm,
            Uplo::Lower,
            MatrixOp::NoTrans,
            N,
            N,
            1.,
            init.as_ptr(),
            1,
            N as isize,
            0.,
            c.as_mut_ptr(),
            1,
            N as isize,
        );
        f64::mksymm(rntm, Uplo::Lower, N, c.as_mut_ptr(), 1, N as isize);
    }
    c
}

pub fn matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let init = init();

    for nthreads in [1, 4] {
        let rntm = Rntm::new(nthreads);
        group.bench_function(format!("gemm/{nthreads}"), |b: &mut Bencher| {
            b.iter(|| black_box(matmul_100_256(&init, rntm)));
        });
        group.bench_function(format!("syrk/{nthreads}"), |b: &mut Bencher| {
            b.iter(|| black_box(syrk_mksymm_256(&init, rntm)));
        });
    }

    group.finish();
}

criterion_group!(benches, matmul);
criterion_main!(benches);
