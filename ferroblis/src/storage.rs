/// Represents a storage for [`crate::matrix::Matrix`]
pub trait Storage: AsRef<[Self::T]> {
    type T;
}

/// Represents a mutable storage for [`crate::matrix::Matrix`]
pub trait StorageMut: Storage + AsMut<[Self::T]> {}

// Vec

impl<T> Storage for Vec<T> {
    type T = T;
}

impl<T> StorageMut for Vec<T> {}

// Shared Slice

impl<'a, T> Storage for &'a [T] {
    type T = T;
}

// Mut Slice

impl<'a, T> Storage for &'a mut [T] {
    type T = T;
}

impl<'a, T> StorageMut for &'a mut [T] {}

// Array

impl<T, const N: usize> Storage for [T; N] {
    type T = T;
}

impl<T, const N: usize> StorageMut for [T; N] {}
