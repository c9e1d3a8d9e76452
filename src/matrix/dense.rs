//! Dense row-major matrix container.
//!
//! `Matrix<T>` is the value type the determinant engine is normally driven with. All
//! operations are non-mutating: `set`, `transpose`, `map` and `multiply` return new
//! matrices and leave their receiver untouched, so a matrix can be shared freely
//! between plan evaluations.

use std::ops::{Index, Mul};

use faer::Mat;
use num_traits::{One, Zero};

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatrixError;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    /// Entries in row-major order.
    data: Vec<T>,
    num_rows: usize,
    num_cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Builds a `rows x cols` matrix by calling `f(i, j)` for every cell, row by row.
    pub fn create<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            num_rows: rows,
            num_cols: cols,
        }
    }

    /// Creates a matrix from a list of rows.
    ///
    /// An empty list gives the 0x0 matrix. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: num_cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.num_rows
    }

    pub fn ncols(&self) -> usize {
        self.num_cols
    }

    /// `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Entry at (i, j), or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.num_rows && j < self.num_cols {
            Some(self.data[i * self.num_cols + j])
        } else {
            None
        }
    }

    /// Entry at (i, j), or `IndexOutOfRange`.
    pub fn try_get(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        self.get(i, j).ok_or_else(|| self.out_of_range(i, j))
    }

    /// Slice of row `i`, or `IndexOutOfRange` if `i >= nrows()`.
    pub fn row(&self, i: usize) -> Result<&[T], MatrixError> {
        if i >= self.num_rows {
            return Err(self.out_of_range(i, 0));
        }
        let start = i * self.num_cols;
        Ok(&self.data[start..start + self.num_cols])
    }

    /// Returns a copy of this matrix with cell (i, j) replaced by `value`.
    pub fn set(&self, i: usize, j: usize, value: T) -> Result<Self, MatrixError> {
        if i >= self.num_rows || j >= self.num_cols {
            return Err(self.out_of_range(i, j));
        }
        let mut out = self.clone();
        out.data[i * self.num_cols + j] = value;
        Ok(out)
    }

    pub fn transpose(&self) -> Self {
        Self::create(self.num_cols, self.num_rows, |i, j| self[(j, i)])
    }

    /// Applies `f(a, i, j)` to every cell.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        U: Copy,
        F: FnMut(T, usize, usize) -> U,
    {
        Matrix::create(self.num_rows, self.num_cols, |i, j| f(self[(i, j)], i, j))
    }

    /// True iff `pred(a, i, j)` holds for every cell (vacuously true when empty).
    pub fn every<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(T, usize, usize) -> bool,
    {
        self.data
            .iter()
            .enumerate()
            .all(|(k, &a)| pred(a, k / self.num_cols, k % self.num_cols))
    }

    /// Deep element-wise equality; matrices of different shapes are never equal.
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.size() == other.size() && self.every(|a, i, j| a == other[(i, j)])
    }

    /// The submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(Self::create(self.num_rows - 1, self.num_cols - 1, |i, j| {
            let si = if i < row { i } else { i + 1 };
            let sj = if j < col { j } else { j + 1 };
            self[(si, sj)]
        }))
    }

    /// Coordinate list `(i, j, value)` of every cell, row-major.
    pub fn indexed(&self) -> Vec<(usize, usize, T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(k, &a)| (k / self.num_cols, k % self.num_cols, a))
            .collect()
    }

    /// Rebuilds a `rows x cols` matrix from a coordinate list.
    ///
    /// Cells absent from `entries` take `default`; for duplicated coordinates the first
    /// entry wins.
    pub fn assemble(rows: usize, cols: usize, entries: &[(usize, usize, T)], default: T) -> Self {
        Self::create(rows, cols, |i, j| {
            entries
                .iter()
                .find(|&&(r, c, _)| r == i && c == j)
                .map_or(default, |&(_, _, v)| v)
        })
    }

    /// Copies into a column-major `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.num_rows, self.num_cols, |i, j| self[(i, j)])
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange {
            row,
            col,
            nrows: self.num_rows,
            ncols: self.num_cols,
        }
    }
}

impl<T: Copy + Zero> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            num_rows: rows,
            num_cols: cols,
        }
    }

    /// Standard matrix product `self * other`.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Mul<Output = T>,
    {
        if self.num_cols != other.num_rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(Self::create(self.num_rows, other.num_cols, |i, j| {
            (0..self.num_cols).fold(T::zero(), |acc, k| acc + self[(i, k)] * other[(k, j)])
        }))
    }
}

impl<T: Copy + Zero + One> Matrix<T> {
    pub fn identity(n: usize) -> Self {
        Self::create(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.num_rows && j < self.num_cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &self.data[i * self.num_cols + j]
    }
}

impl<T: Copy> From<&Mat<T>> for Matrix<T> {
    fn from(m: &Mat<T>) -> Self {
        Self::create(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl<T: Copy> MatrixGet<T> for Matrix<T> {
    fn entry(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.num_rows
    }
    fn ncols(&self) -> usize {
        self.num_cols
    }
}
