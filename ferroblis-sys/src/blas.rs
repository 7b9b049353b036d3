use crate::{inc_t, rntm::Rntm, scalar::Scalar};

pub mod cpu;

/// The transpose/conjugate applied to a stored operand.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixOp {
    NoTrans = b'N',
    Trans = b'T',
    ConjNoTrans = b'R',
    ConjTrans = b'C',
}

impl MatrixOp {
    pub fn from_flags(trans: bool, conj: bool) -> Self {
        match (trans, conj) {
            (false, false) => MatrixOp::NoTrans,
            (true, false) => MatrixOp::Trans,
            (false, true) => MatrixOp::ConjNoTrans,
            (true, true) => MatrixOp::ConjTrans,
        }
    }

    pub fn is_trans(self) -> bool {
        matches!(self, MatrixOp::Trans | MatrixOp::ConjTrans)
    }

    pub fn is_conj(self) -> bool {
        matches!(self, MatrixOp::ConjNoTrans | MatrixOp::ConjTrans)
    }

    /// The op that reads `op(X)ᴴ` out of the same stored `X`.
    #[must_use]
    pub fn adjoint(self) -> Self {
        Self::from_flags(!self.is_trans(), !self.is_conj())
    }

    /// Row and column strides of `op(X)`, given those of the stored `X`.
    pub fn apply(self, rs: inc_t, cs: inc_t) -> (inc_t, inc_t) {
        if self.is_trans() {
            (cs, rs)
        } else {
            (rs, cs)
        }
    }
}

/// Which triangle of a square matrix is stored.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Uplo {
    Upper = b'U',
    Lower = b'L',
}

impl Uplo {
    pub fn from_upper(upper: bool) -> Self {
        if upper {
            Uplo::Upper
        } else {
            Uplo::Lower
        }
    }

    pub fn is_upper(self) -> bool {
        self == Uplo::Upper
    }
}

/// Level 3 routines over arbitrarily strided matrices.
///
/// Every operand is a base pointer plus a row stride and a column stride,
/// in elements. Strides may be negative or non-contiguous.
///
/// # Safety
/// These are unchecked. Every element addressed by the dimensions and strides must
/// lie inside memory the caller owns, the output strides must not map two elements
/// onto one address, and the output must not overlap the inputs.
pub trait BLAS3: Scalar {
    /// `C := alpha * op(A) * op(B) + beta * C`
    ///
    /// `op(A)` is `m x k`, `op(B)` is `k x n` and `C` is `m x n`.
    /// When `beta` is zero, `C` is not read.
    ///
    /// # Safety
    /// See the trait level documentation.
    #[allow(clippy::too_many_arguments)]
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
    );

    /// `C := alpha * op(A) * op(A)ᴴ + beta * C`, writing only the `uplo` triangle of `C`.
    ///
    /// `op(A)` is `m x k` and `C` is `m x m`.
    ///
    /// # Safety
    /// See the trait level documentation.
    #[allow(clippy::too_many_arguments)]
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
    );

    /// Mirrors the `uplo` triangle of the `m x m` matrix `A` onto the other one.
    /// Complex types are mirrored conjugated. The diagonal is left alone.
    ///
    /// # Safety
    /// See the trait level documentation.
    unsafe fn mksymm(rntm: Rntm, uplo: Uplo, m: usize, a: *mut Self, rsa: inc_t, csa: inc_t);
}
