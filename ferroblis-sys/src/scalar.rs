use std::fmt::Debug;

use num_complex::{Complex, Complex32, Complex64};
use num_traits::{One, Zero};

/// An element type the level 3 routines are defined for.
///
/// # Safety
/// The memory layout of `Self` must match the element layout the backends expect:
/// a single IEEE float for the real types, and `[re, im]` for the complex types.
pub unsafe trait Scalar: Copy + Zero + One + PartialEq + Debug + Send + Sync + 'static {
    /// Whether conjugation is meaningful for this type.
    const IS_COMPLEX: bool;

    /// The complex conjugate. The identity for real types.
    #[must_use]
    fn conj(self) -> Self;
}

// at the moment, we only support the four BLAS element types,
// so let's only define those
unsafe impl Scalar for f32 {
    const IS_COMPLEX: bool = false;

    fn conj(self) -> Self {
        self
    }
}

unsafe impl Scalar for f64 {
    const IS_COMPLEX: bool = false;

    fn conj(self) -> Self {
        self
    }
}

unsafe impl Scalar for Complex32 {
    const IS_COMPLEX: bool = true;

    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }
}

unsafe impl Scalar for Complex64 {
    const IS_COMPLEX: bool = true;

    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }
}
