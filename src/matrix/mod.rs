//! Matrix module: the dense `Matrix` container and its operations.

pub mod dense;
pub use dense::Matrix;
pub mod ops;
