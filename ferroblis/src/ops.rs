use ferroblis_sys::{inc_t, MatrixOp, Rntm, Uplo, BLAS3};
use num_traits::{One, Zero};

use crate::{
    dims::self_alias,
    error::{DimsError, Error, Result},
    matrix::Matrix,
    storage::{Storage, StorageMut},
};

/// Arguments to [`gemm_into`] beyond the operands themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GemmOptions<T> {
    pub alpha: T,
    pub beta: T,
    pub a_trans: bool,
    pub a_conj: bool,
    pub b_trans: bool,
    pub b_conj: bool,
    /// Zero or negative uses the library default
    pub nthreads: isize,
}

impl<T: Zero + One> Default for GemmOptions<T> {
    fn default() -> Self {
        Self {
            alpha: T::one(),
            beta: T::zero(),
            a_trans: false,
            a_conj: false,
            b_trans: false,
            b_conj: false,
            nthreads: -1,
        }
    }
}

impl<T> GemmOptions<T> {
    #[must_use]
    pub fn with_alpha(mut self, alpha: T) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_beta(mut self, beta: T) -> Self {
        self.beta = beta;
        self
    }

    #[must_use]
    pub fn with_a(mut self, trans: bool, conj: bool) -> Self {
        self.a_trans = trans;
        self.a_conj = conj;
        self
    }

    #[must_use]
    pub fn with_b(mut self, trans: bool, conj: bool) -> Self {
        self.b_trans = trans;
        self.b_conj = conj;
        self
    }

    #[must_use]
    pub fn with_nthreads(mut self, nthreads: isize) -> Self {
        self.nthreads = nthreads;
        self
    }

    fn ops(&self) -> (MatrixOp, MatrixOp) {
        (
            MatrixOp::from_flags(self.a_trans, self.a_conj),
            MatrixOp::from_flags(self.b_trans, self.b_conj),
        )
    }
}

/// Arguments to [`syrk_into`] beyond the operands themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyrkOptions<T> {
    pub alpha: T,
    pub beta: T,
    pub a_trans: bool,
    pub a_conj: bool,
    /// Write the upper triangle of `C` instead of the lower
    pub upper: bool,
    pub nthreads: isize,
}

impl<T: Zero + One> Default for SyrkOptions<T> {
    fn default() -> Self {
        Self {
            alpha: T::one(),
            beta: T::zero(),
            a_trans: false,
            a_conj: false,
            upper: false,
            nthreads: -1,
        }
    }
}

impl<T> SyrkOptions<T> {
    #[must_use]
    pub fn with_alpha(mut self, alpha: T) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_beta(mut self, beta: T) -> Self {
        self.beta = beta;
        self
    }

    #[must_use]
    pub fn with_a(mut self, trans: bool, conj: bool) -> Self {
        self.a_trans = trans;
        self.a_conj = conj;
        self
    }

    #[must_use]
    pub fn with_upper(mut self, upper: bool) -> Self {
        self.upper = upper;
        self
    }

    #[must_use]
    pub fn with_nthreads(mut self, nthreads: isize) -> Self {
        self.nthreads = nthreads;
        self
    }
}

/// Shape of `op(X)` for a stored `X`
fn op_shape(op: MatrixOp, [rows, cols]: [usize; 2]) -> [usize; 2] {
    if op.is_trans() {
        [cols, rows]
    } else {
        [rows, cols]
    }
}

fn raw_strides<S: Storage>(x: &Matrix<S>) -> Result<(inc_t, inc_t)> {
    let [rs, cs] = x.strides;
    let rs = inc_t::try_from(rs).map_err(|_| DimsError::SizeOverflow)?;
    let cs = inc_t::try_from(cs).map_err(|_| DimsError::SizeOverflow)?;
    Ok((rs, cs))
}

fn check_output<S: Storage>(c: &Matrix<S>, expected: [usize; 2]) -> Result<()> {
    if c.shape != expected {
        return Err(Error::OutputShape {
            expected,
            found: c.shape,
        });
    }
    if let Some((i, j)) = self_alias(c.shape, c.strides) {
        return Err(Error::SelfAlias(i, j));
    }
    Ok(())
}

fn check_square<S: Storage>(c: &Matrix<S>) -> Result<()> {
    if c.is_square() {
        Ok(())
    } else {
        Err(Error::NotSquare {
            rows: c.rows(),
            cols: c.cols(),
        })
    }
}

fn zeros<T: Zero + Clone>(shape: [usize; 2]) -> Result<Matrix<Vec<T>>> {
    let len = shape[0]
        .checked_mul(shape[1])
        .ok_or(DimsError::SizeOverflow)?;
    Ok(Matrix::from_shape(shape, vec![T::zero(); len]))
}

fn gemm_shape<T>(
    a: &Matrix<impl Storage<T = T>>,
    b: &Matrix<impl Storage<T = T>>,
    transa: MatrixOp,
    transb: MatrixOp,
) -> Result<[usize; 3]> {
    let [m, k] = op_shape(transa, a.shape);
    let [kb, n] = op_shape(transb, b.shape);
    if k != kb {
        return Err(Error::Shape {
            a: [m, k],
            b: [kb, n],
        });
    }
    Ok([m, n, k])
}

/// `C := alpha * op(A) * op(B) + beta * C`
///
/// ```
/// use ferroblis::{gemm_into, GemmOptions, Matrix};
///
/// let a = Matrix::from_shape([2, 2], [1., 2., 3., 4.]);
/// let b = Matrix::from_shape([2, 2], [1., 0., 0., 1.]);
/// let mut c = Matrix::from_shape([2, 2], [1.; 4]);
///
/// let opts = GemmOptions::default().with_alpha(2.).with_beta(1.);
/// gemm_into(&a, &b, &mut c, &opts).unwrap();
/// assert_eq!(c.into_inner(), [3., 5., 7., 9.]);
/// ```
pub fn gemm_into<T: BLAS3>(
    a: &Matrix<impl Storage<T = T>>,
    b: &Matrix<impl Storage<T = T>>,
    c: &mut Matrix<impl StorageMut<T = T>>,
    opts: &GemmOptions<T>,
) -> Result<()> {
    let (transa, transb) = opts.ops();
    let [m, n, k] = gemm_shape(a, b, transa, transb)?;
    check_output(c, [m, n])?;

    let (rsa, csa) = raw_strides(a)?;
    let (rsb, csb) = raw_strides(b)?;
    let (rsc, csc) = raw_strides(c)?;

    log::trace!(
        "gemm {:?}{:?} m={m} n={n} k={k} nthreads={}",
        transa,
        transb,
        opts.nthreads
    );

    // Safety:
    // every view was bounds checked when it was built,
    // the output strides are checked for aliasing above,
    // and `c` is borrowed mutably so cannot overlap `a` or `b`.
    unsafe {
        T::gemm(
            Rntm::new(opts.nthreads),
            transa,
            transb,
            m,
            n,
            k,
            opts.alpha,
            a.as_ptr(),
            rsa,
            csa,
            b.as_ptr(),
            rsb,
            csb,
            opts.beta,
            c.as_mut_ptr(),
            rsc,
            csc,
        );
    }
    Ok(())
}

/// `alpha * op(A) * op(B)` into a new column major matrix
pub fn gemm<T: BLAS3>(
    a: &Matrix<impl Storage<T = T>>,
    b: &Matrix<impl Storage<T = T>>,
    opts: &GemmOptions<T>,
) -> Result<Matrix<Vec<T>>> {
    let (transa, transb) = opts.ops();
    let [m, n, _] = gemm_shape(a, b, transa, transb)?;
    let mut c = zeros([m, n])?;
    gemm_into(a, b, &mut c, opts)?;
    Ok(c)
}

/// `C := alpha * op(A) * op(A)ᴴ + beta * C` over one triangle of `C`.
///
/// The other triangle is not touched. For real types `ᴴ` is just the transpose.
pub fn syrk_into<T: BLAS3>(
    a: &Matrix<impl Storage<T = T>>,
    c: &mut Matrix<impl StorageMut<T = T>>,
    opts: &SyrkOptions<T>,
) -> Result<()> {
    let transa = MatrixOp::from_flags(opts.a_trans, opts.a_conj);
    let uplo = Uplo::from_upper(opts.upper);
    let [m, k] = op_shape(transa, a.shape);
    check_square(c)?;
    check_output(c, [m, m])?;

    let (rsa, csa) = raw_strides(a)?;
    let (rsc, csc) = raw_strides(c)?;

    log::trace!(
        "syrk {:?}{:?} m={m} k={k} nthreads={}",
        uplo,
        transa,
        opts.nthreads
    );

    // Safety: as in `gemm_into`
    unsafe {
        T::syrk(
            Rntm::new(opts.nthreads),
            uplo,
            transa,
            m,
            k,
            opts.alpha,
            a.as_ptr(),
            rsa,
            csa,
            opts.beta,
            c.as_mut_ptr(),
            rsc,
            csc,
        );
    }
    Ok(())
}

/// [`syrk_into`] over a new zeroed matrix. Only the requested triangle is filled.
pub fn syrk<T: BLAS3>(
    a: &Matrix<impl Storage<T = T>>,
    opts: &SyrkOptions<T>,
) -> Result<Matrix<Vec<T>>> {
    let transa = MatrixOp::from_flags(opts.a_trans, opts.a_conj);
    let [m, _] = op_shape(transa, a.shape);
    let mut c = zeros([m, m])?;
    syrk_into(a, &mut c, opts)?;
    Ok(c)
}

/// Copies the `upper` (or lower) triangle of the square matrix `a` over the other one.
/// Complex types are conjugated on the way.
pub fn mksymm<T: BLAS3>(
    a: &mut Matrix<impl StorageMut<T = T>>,
    upper: bool,
    nthreads: isize,
) -> Result<()> {
    check_square(a)?;
    if let Some((i, j)) = self_alias(a.shape, a.strides) {
        return Err(Error::SelfAlias(i, j));
    }
    let uplo = Uplo::from_upper(upper);
    let m = a.rows();
    let (rsa, csa) = raw_strides(a)?;

    log::trace!("mksymm {:?} m={m} nthreads={nthreads}", uplo);

    // Safety: bounds checked at construction, aliasing checked above
    unsafe {
        T::mksymm(Rntm::new(nthreads), uplo, m, a.as_mut_ptr(), rsa, csa);
    }
    Ok(())
}

/// Whether `b` is exactly `a.t()`, same storage and all.
fn is_transpose_of<T>(a: &Matrix<impl Storage<T = T>>, b: &Matrix<impl Storage<T = T>>) -> bool {
    let [rows, cols] = a.shape;
    let [rs, cs] = a.strides;
    a.as_ptr() == b.as_ptr() && b.shape == [cols, rows] && b.strides == [cs, rs]
}

/// `C := A * B`
///
/// When `b` is the transposed view of `a` and the elements are real,
/// only the lower triangle is computed and then mirrored.
pub fn dot_into<T: BLAS3>(
    a: &Matrix<impl Storage<T = T>>,
    b: &Matrix<impl Storage<T = T>>,
    c: &mut Matrix<impl StorageMut<T = T>>,
    nthreads: isize,
) -> Result<()> {
    if !T::IS_COMPLEX && is_transpose_of(a, b) {
        log::debug!("dot: A * A^T shortcut, m={} k={}", a.rows(), a.cols());
        let opts = SyrkOptions::default().with_nthreads(nthreads);
        syrk_into(a, c, &opts)?;
        return mksymm(c, false, nthreads);
    }

    let opts = GemmOptions::default().with_nthreads(nthreads);
    gemm_into(a, b, c, &opts)
}

/// [`dot_into`] a new column major matrix
///
/// ```
/// use ferroblis::{dot, Matrix};
///
/// let a = Matrix::from_shape([3, 2], [0., 2., 4., 1., 3., 5.]);
/// let b = Matrix::from_shape([2, 2], [0., 2., 1., 3.]);
///
/// let c = dot(&a, &b, -1).unwrap();
/// assert_eq!(c.into_inner(), [2., 6., 10., 3., 11., 19.]);
/// ```
pub fn dot<T: BLAS3>(
    a: &Matrix<impl Storage<T = T>>,
    b: &Matrix<impl Storage<T = T>>,
    nthreads: isize,
) -> Result<Matrix<Vec<T>>> {
    let [m, n, _] = gemm_shape(a, b, MatrixOp::NoTrans, MatrixOp::NoTrans)?;
    let mut c = zeros([m, n])?;
    dot_into(a, b, &mut c, nthreads)?;
    Ok(c)
}
