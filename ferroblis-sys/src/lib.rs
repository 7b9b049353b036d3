//! Level 3 BLAS bindings with scalars passed by value.
//!
//! [`BLAS3`] is implemented for `f32`, `f64`, [`Complex32`](num_complex::Complex32) and
//! [`Complex64`](num_complex::Complex64) over arbitrarily strided operands.
//! [`ffi`] exposes the same routines as `fbli_`-prefixed `extern "C"` functions.

/// Traits and implementations of BLAS providers
pub mod blas;

/// Prefixed `extern "C"` entry points
pub mod ffi;

/// Per-call runtime configuration
pub mod rntm;

/// Supported element types
pub mod scalar;

pub use blas::{MatrixOp, Uplo, BLAS3};
pub use rntm::Rntm;
pub use scalar::Scalar;

/// A matrix dimension, as passed across the flat interface.
#[allow(non_camel_case_types)]
pub type dim_t = isize;

/// A stride in elements, as passed across the flat interface.
#[allow(non_camel_case_types)]
pub type inc_t = isize;
