use super::parallel::{for_each_panel, SendPtr};
use crate::{
    blas::{MatrixOp, Uplo, BLAS3},
    inc_t,
    rntm::Rntm,
    scalar::Scalar,
};

/// Column block width for the triangle update.
const NB: usize = 64;

/// Rank-k update restricted to one triangle, expressed as gemm calls.
///
/// Each block of `NB` columns gets one gemm for its off-diagonal rectangle
/// and one thin gemm per column inside the diagonal block.
/// The right operand is `op(A)ᴴ`, read from the same storage as `A`.
#[allow(clippy::too_many_arguments)]
pub(super) unsafe fn syrk<F: BLAS3>(
    rntm: Rntm,
    uplo: Uplo,
    transa: MatrixOp,
    m: usize,
    k: usize,
    alpha: F,
    a: *const F,
    rsa: inc_t,
    csa: inc_t,
    beta: F,
    c: *mut F,
    rsc: inc_t,
    csc: inc_t,
) {
    let transb = transa.adjoint();

    // row `i` of op(A), which is also column `i` of op(A)ᴴ
    let (ars, _) = transa.apply(rsa, csa);
    let row = |i: usize| a.wrapping_offset(i as isize * ars);
    let at = |i: usize, j: usize| c.wrapping_offset(i as isize * rsc + j as isize * csc);

    for j0 in (0..m).step_by(NB) {
        let j1 = (j0 + NB).min(m);

        let (i0, i1) = match uplo {
            Uplo::Upper => (0, j0),
            Uplo::Lower => (j1, m),
        };
        if i1 > i0 {
            F::gemm(
                rntm,
                transa,
                transb,
                i1 - i0,
                j1 - j0,
                k,
                alpha,
                row(i0),
                rsa,
                csa,
                row(j0),
                rsa,
                csa,
                beta,
                at(i0, j0),
                rsc,
                csc,
            );
        }

        for j in j0..j1 {
            let (i0, i1) = match uplo {
                Uplo::Upper => (j0, j + 1),
                Uplo::Lower => (j, j1),
            };
            F::gemm(
                rntm,
                transa,
                transb,
                i1 - i0,
                1,
                k,
                alpha,
                row(i0),
                rsa,
                csa,
                row(j),
                rsa,
                csa,
                beta,
                at(i0, j),
                rsc,
                csc,
            );
        }
    }
}

/// Copies the `uplo` triangle of `A` onto the opposite strict triangle,
/// conjugating on the way. Destination columns are split across threads.
pub(super) unsafe fn mksymm<F: Scalar>(
    rntm: Rntm,
    uplo: Uplo,
    m: usize,
    a: *mut F,
    rsa: inc_t,
    csa: inc_t,
) {
    let a = SendPtr::new(a);
    let at = move |i: usize, j: usize| a.get().wrapping_offset(i as isize * rsa + j as isize * csa);

    for_each_panel(rntm, m, |j0, j1| {
        for j in j0..j1 {
            let rows = match uplo {
                Uplo::Upper => j + 1..m,
                Uplo::Lower => 0..j,
            };
            for i in rows {
                *at(i, j) = (*at(j, i)).conj();
            }
        }
    });
}
