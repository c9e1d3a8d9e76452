//! Core traits and their implementations for external matrix types.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, MatrixGet, Scalar};
