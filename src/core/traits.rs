//! Core matrix-access traits for cofactor.

/// Matrix dimensions.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Read access to a single entry, A[i, j].
///
/// Callers guarantee `i < nrows()` and `j < ncols()`; implementations may panic otherwise.
pub trait MatrixGet<T> {
    fn entry(&self, i: usize, j: usize) -> T;
}

/// Numeric entry type the determinant engine can evaluate over.
///
/// Blanket-implemented for every `Copy` type with zero, `+`, `-` and `*`.
pub trait Scalar:
    Copy
    + num_traits::Zero
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + Send
    + Sync
{
}

impl<T> Scalar for T where
    T: Copy
        + num_traits::Zero
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + Send
        + Sync
{
}
