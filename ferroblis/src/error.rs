use thiserror::Error;

/// Error during the construction of a matrix view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DimsError {
    /// The size of the matrix does not fit in an `isize`.
    #[error("matrix size overflows")]
    SizeOverflow,
    /// The buffer is too small. This variant contains the required buffer size.
    #[error("buffer too small, {0} elements required")]
    BufferTooSmall(usize),
}

/// Errors from the checked matrix operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Dims(#[from] DimsError),

    /// The inner dimensions of `op(a)` and `op(b)` do not agree.
    #[error("cannot multiply a {a:?} matrix by a {b:?} matrix")]
    Shape { a: [usize; 2], b: [usize; 2] },

    #[error("output has shape {found:?}, expected {expected:?}")]
    OutputShape {
        expected: [usize; 2],
        found: [usize; 2],
    },

    #[error("matrix must be square, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The output strides put element `(i, 0)` on the same address as `(0, j)`.
    #[error("output element ({0}, 0) aliases element (0, {1})")]
    SelfAlias(usize, usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
