use thiserror::Error;

// Unified error type for cofactor

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid shape {nrows}x{ncols}: determinant requires a non-empty square matrix")]
    InvalidShape { nrows: usize, ncols: usize },
    #[error("index ({row}, {col}) out of range for {nrows}x{ncols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error("ragged rows: row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("dimension mismatch: {left:?} cannot be multiplied by {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("expansion order {order} exceeds configured maximum {max}")]
    OrderTooLarge { order: usize, max: usize },
}
