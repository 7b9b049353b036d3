use num_complex::{Complex32, Complex64};

use super::{MatrixOp, Uplo, BLAS3};
use crate::{inc_t, rntm::Rntm};

#[cfg(feature = "blas-sys")]
#[allow(clippy::module_inception)]
mod blas_sys;

mod matmul;
mod parallel;
mod triangle;

/// Hands column-contiguous gemm calls to the linked Fortran BLAS.
/// Returns `false` when the call has to go to [`matmul`] instead.
#[cfg(feature = "blas-sys")]
#[allow(clippy::too_many_arguments)]
unsafe fn fortran<F: blas_sys::Fortran>(
    transa: MatrixOp,
    transb: MatrixOp,
    m: usize,
    n: usize,
    k: usize,
    alpha: F,
    a: *const F,
    rsa: inc_t,
    csa: inc_t,
    b: *const F,
    rsb: inc_t,
    csb: inc_t,
    beta: F,
    c: *mut F,
    rsc: inc_t,
    csc: inc_t,
) -> bool {
    blas_sys::gemm(
        transa, transb, m, n, k, alpha, a, rsa, csa, b, rsb, csb, beta, c, rsc, csc,
    )
}

#[cfg(not(feature = "blas-sys"))]
#[allow(clippy::too_many_arguments, unused_variables)]
unsafe fn fortran<F>(
    transa: MatrixOp,
    transb: MatrixOp,
    m: usize,
    n: usize,
    k: usize,
    alpha: F,
    a: *const F,
    rsa: inc_t,
    csa: inc_t,
    b: *const F,
    rsb: inc_t,
    csb: inc_t,
    beta: F,
    c: *mut F,
    rsc: inc_t,
    csc: inc_t,
) -> bool {
    false
}

macro_rules! impl_blas3 {
    ($float:ty) => {
        impl BLAS3 for $float {
            unsafe fn gemm(
                rntm: Rntm,
                transa: MatrixOp,
                transb: MatrixOp,
                m: usize,
                n: usize,
                k: usize,
                alpha: Self,
                a: *const Self,
                rsa: inc_t,
                csa: inc_t,
                b: *const Self,
                rsb: inc_t,
                csb: inc_t,
                beta: Self,
                c: *mut Self,
                rsc: inc_t,
                csc: inc_t,
            ) {
                if !fortran(
                    transa, transb, m, n, k, alpha, a, rsa, csa, b, rsb, csb, beta, c, rsc, csc,
                ) {
                    matmul::gemm(
                        rntm, transa, transb, m, n, k, alpha, a, rsa, csa, b, rsb, csb, beta, c,
                        rsc, csc,
                    );
                }
            }

            unsafe fn syrk(
                rntm: Rntm,
                uplo: Uplo,
                transa: MatrixOp,
                m: usize,
                k: usize,
                alpha: Self,
                a: *const Self,
                rsa: inc_t,
                csa: inc_t,
                beta: Self,
                c: *mut Self,
                rsc: inc_t,
                csc: inc_t,
            ) {
                triangle::syrk(
                    rntm, uplo, transa, m, k, alpha, a, rsa, csa, beta, c, rsc, csc,
                );
            }

            unsafe fn mksymm(
                rntm: Rntm,
                uplo: Uplo,
                m: usize,
                a: *mut Self,
                rsa: inc_t,
                csa: inc_t,
            ) {
                triangle::mksymm(rntm, uplo, m, a, rsa, csa);
            }
        }
    };
}

impl_blas3!(f32);
impl_blas3!(f64);
impl_blas3!(Complex32);
impl_blas3!(Complex64);
