extern crate blas_src;
extern crate blas_sys;

use std::os::raw::{c_char, c_int};

use num_complex::{Complex32, Complex64};

use crate::{blas::MatrixOp, inc_t, scalar::Scalar};

/// The Fortran `?gemm_` for an element type.
pub(super) trait Fortran: Scalar {
    #[allow(clippy::too_many_arguments)]
    unsafe fn fgemm(
        transa: c_char,
        transb: c_char,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: Self,
        a: *const Self,
        lda: c_int,
        b: *const Self,
        ldb: c_int,
        beta: Self,
        c: *mut Self,
        ldc: c_int,
    );
}

macro_rules! impl_fortran {
    ($float:ty => gemm: $gemm:path) => {
        impl Fortran for $float {
            unsafe fn fgemm(
                transa: c_char,
                transb: c_char,
                m: c_int,
                n: c_int,
                k: c_int,
                alpha: Self,
                a: *const Self,
                lda: c_int,
                b: *const Self,
                ldb: c_int,
                beta: Self,
                c: *mut Self,
                ldc: c_int,
            ) {
                $gemm(
                    &transa,
                    &transb,
                    &m,
                    &n,
                    &k,
                    &alpha as *const Self as *const _,
                    a as *const _,
                    &lda,
                    b as *const _,
                    &ldb,
                    &beta as *const Self as *const _,
                    c as *mut _,
                    &ldc,
                );
            }
        }
    };
}

impl_fortran!(f32 => gemm: blas_sys::sgemm_);
impl_fortran!(f64 => gemm: blas_sys::dgemm_);
impl_fortran!(Complex32 => gemm: blas_sys::cgemm_);
impl_fortran!(Complex64 => gemm: blas_sys::zgemm_);

fn op_char(op: MatrixOp) -> c_char {
    op as u8 as c_char
}

/// The Fortran op and leading dimension that reads `op(X)` out of a stored
/// `rows x cols` matrix `X`, if either of its strides is unit.
fn lead<F: Scalar>(op: MatrixOp, rs: inc_t, cs: inc_t, rows: usize, cols: usize) -> Option<(c_char, c_int)> {
    // conjugating a real matrix is a no-op
    let op = if F::IS_COMPLEX {
        op
    } else {
        MatrixOp::from_flags(op.is_trans(), false)
    };

    if rs == 1 && cs >= rows.max(1) as isize {
        // column major, Fortran has no conjugate-without-transpose
        if op == MatrixOp::ConjNoTrans {
            return None;
        }
        Some((op_char(op), c_int::try_from(cs).ok()?))
    } else if cs == 1 && rs >= cols.max(1) as isize {
        // row major, so column major storage of Xᵀ
        let op = match op {
            MatrixOp::NoTrans => MatrixOp::Trans,
            MatrixOp::Trans => MatrixOp::NoTrans,
            MatrixOp::ConjNoTrans => MatrixOp::ConjTrans,
            MatrixOp::ConjTrans => return None,
        };
        Some((op_char(op), c_int::try_from(rs).ok()?))
    } else {
        None
    }
}

/// Calls the Fortran gemm when every operand fits its column major layout.
/// Returns `false`, without touching anything, when it doesn't.
#[allow(clippy::too_many_arguments)]
pub(super) unsafe fn gemm<F: Fortran>(
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
    if m == 0 || n == 0 || k == 0 {
        return false;
    }
    let (Ok(fm), Ok(fn_), Ok(fk)) = (c_int::try_from(m), c_int::try_from(n), c_int::try_from(k))
    else {
        return false;
    };

    // C must not be transposed
    if rsc != 1 || csc < m as isize {
        return false;
    }
    let Ok(ldc) = c_int::try_from(csc) else {
        return false;
    };

    let (ra, ca) = if transa.is_trans() { (k, m) } else { (m, k) };
    let (rb, cb) = if transb.is_trans() { (n, k) } else { (k, n) };
    let Some((opa, lda)) = lead::<F>(transa, rsa, csa, ra, ca) else {
        return false;
    };
    let Some((opb, ldb)) = lead::<F>(transb, rsb, csb, rb, cb) else {
        return false;
    };

    F::fgemm(opa, opb, fm, fn_, fk, alpha, a, lda, b, ldb, beta, c, ldc);
    true
}
