//! Checked matrix views over [`ferroblis_sys`].
//!
//! ```
//! use ferroblis::Matrix;
//!
//! //     0 1
//! // A = 2 3
//! //     4 5
//! let a = Matrix::from_shape([3, 2], [0., 2., 4., 1., 3., 5.]);
//!
//! // A^T A, computed as a rank-k update and a mirror
//! let c = a.t().dot(&a).unwrap();
//! assert_eq!(c.into_inner(), [20., 26., 26., 35.]);
//! ```

pub use ferroblis_sys as sys;

/// Traits and implementations for basic dimension types
pub mod dims;

pub mod error;

/// Strided matrix views
pub mod matrix;

/// The checked level 3 operations
pub mod ops;

/// Traits and implementations for basic storage buffers
pub mod storage;

pub use error::{DimsError, Error, Result};
pub use matrix::{Matrix, MatrixView, MatrixViewMut};
pub use num_complex::{Complex32, Complex64};
pub use ops::{
    dot, dot_into, gemm, gemm_into, mksymm, syrk, syrk_into, GemmOptions, SyrkOptions,
};
pub use storage::{Storage, StorageMut};
