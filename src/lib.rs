//! cofactor: dense matrix algebra with a memoized cofactor-expansion determinant.
//!
//! This crate provides a small row-major `Matrix` type (construction, transpose,
//! mapping, equality, multiplication, identity) and a determinant engine that builds
//! the Laplace expansion of each matrix order once, caches it, and re-evaluates it
//! against any matrix of that order, including `faer::Mat` values.

pub mod config;
pub mod core;
pub mod error;
pub mod expansion;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::expansion::{determinant, determinant_with, PlanCache};
pub use crate::matrix::*;
