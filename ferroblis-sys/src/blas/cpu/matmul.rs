use matrixmultiply::{cgemm, dgemm, sgemm, zgemm, CGemmOption};
use num_complex::{Complex32, Complex64};

use super::parallel::{for_each_panel, SendPtr};
use crate::{blas::MatrixOp, inc_t, rntm::Rntm, scalar::Scalar};

/// A single-threaded strided gemm from `matrixmultiply`.
///
/// Takes the strides of `op(A)` and `op(B)` directly, so transposes are already
/// folded in. Conjugation has to be applied before calling it.
pub(super) trait Kernel: Scalar {
    #[allow(clippy::too_many_arguments)]
    unsafe fn kernel(
        m: usize,
        k: usize,
        n: usize,
        alpha: Self,
        a: *const Self,
        rsa: isize,
        csa: isize,
        b: *const Self,
        rsb: isize,
        csb: isize,
        beta: Self,
        c: *mut Self,
        rsc: isize,
        csc: isize,
    );
}

macro_rules! impl_real_kernel {
    ($float:ty => $gemm:path) => {
        impl Kernel for $float {
            unsafe fn kernel(
                m: usize,
                k: usize,
                n: usize,
                alpha: Self,
                a: *const Self,
                rsa: isize,
                csa: isize,
                b: *const Self,
                rsb: isize,
                csb: isize,
                beta: Self,
                c: *mut Self,
                rsc: isize,
                csc: isize,
            ) {
                $gemm(
                    m, k, n, alpha, a, rsa, csa, b, rsb, csb, beta, c, rsc, csc,
                )
            }
        }
    };
}

macro_rules! impl_complex_kernel {
    ($complex:ty => $gemm:path, $real:ty) => {
        impl Kernel for $complex {
            unsafe fn kernel(
                m: usize,
                k: usize,
                n: usize,
                alpha: Self,
                a: *const Self,
                rsa: isize,
                csa: isize,
                b: *const Self,
                rsb: isize,
                csb: isize,
                beta: Self,
                c: *mut Self,
                rsc: isize,
                csc: isize,
            ) {
                // `Complex<T>` is `repr(C)` and lays out as `[re, im]`
                $gemm(
                    CGemmOption::Standard,
                    CGemmOption::Standard,
                    m,
                    k,
                    n,
                    [alpha.re, alpha.im],
                    a.cast::<[$real; 2]>(),
                    rsa,
                    csa,
                    b.cast::<[$real; 2]>(),
                    rsb,
                    csb,
                    [beta.re, beta.im],
                    c.cast::<[$real; 2]>(),
                    rsc,
                    csc,
                )
            }
        }
    };
}

impl_real_kernel!(f32 => sgemm);
impl_real_kernel!(f64 => dgemm);
impl_complex_kernel!(Complex32 => cgemm, f32);
impl_complex_kernel!(Complex64 => zgemm, f64);

/// Column major copy of the conjugated `rows x cols` matrix at `x`.
unsafe fn conjugated<F: Scalar>(
    rows: usize,
    cols: usize,
    x: *const F,
    rs: isize,
    cs: isize,
) -> Vec<F> {
    log::trace!("conjugating a {rows}x{cols} operand");
    let mut out = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            out.push((*x.offset(i as isize * rs + j as isize * cs)).conj());
        }
    }
    out
}

/// Pointer and strides of `op(X)`, for a stored `X` at `x`.
///
/// `matrixmultiply` has no conjugating kernels, so a conjugated complex operand
/// is copied into `scratch` first. The returned pointer borrows from it.
#[allow(clippy::too_many_arguments)]
unsafe fn operand<F: Scalar>(
    op: MatrixOp,
    rows: usize,
    cols: usize,
    x: *const F,
    rs: inc_t,
    cs: inc_t,
    scratch: &mut Vec<F>,
) -> (*const F, isize, isize) {
    let (rs, cs) = op.apply(rs, cs);
    if !(F::IS_COMPLEX && op.is_conj()) {
        return (x, rs, cs);
    }
    *scratch = conjugated(rows, cols, x, rs, cs);
    (scratch.as_ptr(), 1, rows.max(1) as isize)
}

/// Runs the gemm with one column panel of `C` per thread.
#[allow(clippy::too_many_arguments)]
pub(super) unsafe fn gemm<F: Kernel>(
    rntm: Rntm,
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
) {
    if n == 0 {
        return;
    }

    let (mut a_conj, mut b_conj) = (Vec::new(), Vec::new());
    let (a, rsa, csa) = operand(transa, m, k, a, rsa, csa, &mut a_conj);
    let (b, rsb, csb) = operand(transb, k, n, b, rsb, csb, &mut b_conj);

    let a = SendPtr::new(a as *mut F);
    let b = SendPtr::new(b as *mut F);
    let c = SendPtr::new(c);

    for_each_panel(rntm, n, |j0, j1| {
        let j = j0 as isize;
        F::kernel(
            m,
            k,
            j1 - j0,
            alpha,
            a.get(),
            rsa,
            csa,
            b.get().wrapping_offset(j * csb),
            rsb,
            csb,
            beta,
            c.get().wrapping_offset(j * csc),
            rsc,
            csc,
        );
    });
}
