//! Wrappers for faer dense matrix types.
//!
//! Implements the access traits for `faer::Mat` and `faer::MatRef`, so that the
//! determinant engine can evaluate its expansion plans directly against faer storage
//! without copying into a [`crate::matrix::Matrix`].
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{MatShape, MatrixGet};
use faer::{Mat, MatRef};

impl<T: Copy> MatrixGet<T> for Mat<T> {
    fn entry(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<'a, T: Copy> MatrixGet<T> for MatRef<'a, T> {
    fn entry(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<'a, T> MatShape for MatRef<'a, T> {
    fn nrows(&self) -> usize {
        (*self).nrows()
    }
    fn ncols(&self) -> usize {
        (*self).ncols()
    }
}
