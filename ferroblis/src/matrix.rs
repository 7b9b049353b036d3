use ferroblis_sys::BLAS3;

use crate::{
    dims::{largest_offset, Dimension},
    error::{DimsError, Result},
    ops,
    storage::{Storage, StorageMut},
};

/// A 2-dimensional strided view over some storage.
///
/// `shape` is `[rows, cols]` and `strides` is `[row_stride, col_stride]`, in elements.
/// Every element the shape and strides address lies inside `data`.
#[derive(Clone, Debug)]
pub struct Matrix<S: Storage> {
    pub(crate) shape: [usize; 2],
    pub(crate) strides: [usize; 2],
    pub(crate) data: S,
}

/// A 'view' of a matrix, Like `&[T]` is to `Vec<T>`
pub type MatrixView<'a, T> = Matrix<&'a [T]>;

/// A 'mut view' of a matrix, Like `&mut [T]` is to `Vec<T>`
pub type MatrixViewMut<'a, T> = Matrix<&'a mut [T]>;

impl<S: Storage> Matrix<S> {
    /// A column major matrix over `data`.
    ///
    /// # Panics
    /// If `data` does not hold exactly `rows * cols` elements
    pub fn from_shape(shape: [usize; 2], data: S) -> Self {
        assert_eq!(Some(data.as_ref().len()), shape.checked_len());
        let strides = shape.column_major_strides();
        Self {
            shape,
            strides,
            data,
        }
    }

    /// A matrix over `data` with arbitrary strides.
    pub fn from_shape_strides(
        shape: [usize; 2],
        strides: [usize; 2],
        data: S,
    ) -> Result<Self, DimsError> {
        if let Some(offset) = largest_offset(shape, strides)? {
            if offset >= data.as_ref().len() {
                return Err(DimsError::BufferTooSmall(offset + 1));
            }
        }
        Ok(Self {
            shape,
            strides,
            data,
        })
    }

    /// `[rows, cols]`
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// `[row_stride, col_stride]`, in elements
    pub fn strides(&self) -> [usize; 2] {
        self.strides
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Whether `rows == cols`
    pub fn is_square(&self) -> bool {
        self.shape[0] == self.shape[1]
    }

    /// Gives back the underlying storage
    pub fn into_inner(self) -> S {
        self.data
    }

    /// Pointer to element `(0, 0)`
    pub fn as_ptr(&self) -> *const S::T {
        self.data.as_ref().as_ptr()
    }

    /// The element at row `i`, column `j`, or `None` when out of range
    pub fn get(&self, i: usize, j: usize) -> Option<&S::T> {
        let [rows, cols] = self.shape;
        if i >= rows || j >= cols {
            return None;
        }
        let [rs, cs] = self.strides;
        self.data.as_ref().get(i * rs + j * cs)
    }

    /// Borrows the same elements as a [`MatrixView`]
    pub fn view(&self) -> MatrixView<S::T> {
        Matrix {
            shape: self.shape,
            strides: self.strides,
            data: self.data.as_ref(),
        }
    }

    /// Borrows the same elements as a [`MatrixViewMut`]
    pub fn view_mut(&mut self) -> MatrixViewMut<S::T>
    where
        S: StorageMut,
    {
        Matrix {
            shape: self.shape,
            strides: self.strides,
            data: self.data.as_mut(),
        }
    }

    /// Swaps rows and columns in place, without moving any data
    pub fn reverse_axes(&mut self) {
        self.shape.reverse();
        self.strides.reverse();
    }

    /// The transpose, as a view over the same storage.
    pub fn t(&self) -> MatrixView<S::T> {
        let mut view = self.view();
        view.reverse_axes();
        view
    }

    /// Copies the elements out in column major order.
    pub fn to_vec(&self) -> Vec<S::T>
    where
        S::T: Copy,
    {
        let [rows, cols] = self.shape;
        let [rs, cs] = self.strides;
        let data = self.data.as_ref();
        (0..cols)
            .flat_map(|j| (0..rows).map(move |i| data[i * rs + j * cs]))
            .collect()
    }

    /// Multiply two matrices together.
    pub fn dot(&self, rhs: &Matrix<impl Storage<T = S::T>>) -> Result<Matrix<Vec<S::T>>>
    where
        S::T: BLAS3,
    {
        ops::dot(self, rhs, -1)
    }
}

impl<S: StorageMut> Matrix<S> {
    /// Mutable pointer to element `(0, 0)`
    pub fn as_mut_ptr(&mut self) -> *mut S::T {
        self.data.as_mut().as_mut_ptr()
    }

    /// Like [`Matrix::get`], but mutable
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut S::T> {
        let [rows, cols] = self.shape;
        if i >= rows || j >= cols {
            return None;
        }
        let [rs, cs] = self.strides;
        self.data.as_mut().get_mut(i * rs + j * cs)
    }
}
