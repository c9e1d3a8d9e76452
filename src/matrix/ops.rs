//! Free-function forms of the `Matrix` operations.

use std::ops::Mul;

use num_traits::{One, Zero};

use crate::error::MatrixError;
use crate::matrix::dense::Matrix;

pub fn size<T: Copy>(a: &Matrix<T>) -> (usize, usize) {
    a.size()
}

pub fn create<T: Copy, F>(rows: usize, cols: usize, initializer: F) -> Matrix<T>
where
    F: FnMut(usize, usize) -> T,
{
    Matrix::create(rows, cols, initializer)
}

pub fn set<T: Copy>(a: &Matrix<T>, i: usize, j: usize, value: T) -> Result<Matrix<T>, MatrixError> {
    a.set(i, j, value)
}

pub fn equals<T: Copy + PartialEq>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    a.equals(b)
}

pub fn every<T: Copy, F>(a: &Matrix<T>, predicate: F) -> bool
where
    F: FnMut(T, usize, usize) -> bool,
{
    a.every(predicate)
}

pub fn multiply<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
where
    T: Copy + Zero + Mul<Output = T>,
{
    a.multiply(b)
}

pub fn transpose<T: Copy>(a: &Matrix<T>) -> Matrix<T> {
    a.transpose()
}

pub fn identity<T: Copy + Zero + One>(n: usize) -> Matrix<T> {
    Matrix::identity(n)
}
