//! Determinant engine: Laplace cofactor expansion with per-order plan reuse.
//!
//! `determinant(A)` looks up the expansion plan for `A`'s order in the process-wide
//! [`PlanCache`] (building it on first use) and evaluates it against `A`:
//!
//! - [`plan`]: the symbolic expansion and its builder.
//! - [`cache`]: memoization of plans per order.
//! - [`eval`]: substitution of matrix entries into a plan.
//!
//! # Example
//! ```rust
//! use cofactor::{determinant, Matrix};
//! let a = Matrix::from_rows(vec![vec![5, 4, 1], vec![1, 3, 4], vec![4, 4, 5]]).unwrap();
//! assert_eq!(determinant(&a), Ok(31));
//! ```
//!
//! Building a plan for order N touches N! leaf terms; `DetOptions::max_order` bounds it.

pub mod cache;
pub mod eval;
pub mod plan;

pub use cache::PlanCache;
pub use plan::{ElementRef, Expansion, ExpansionNode, Sign};

use crate::config::DetOptions;
use crate::core::traits::{MatShape, MatrixGet, Scalar};
use crate::error::MatrixError;

/// Determinant of a square matrix with default options.
///
/// # Errors
/// * `InvalidShape` if `a` is not square or has no rows
/// * `OrderTooLarge` if its order exceeds [`DetOptions::default`]'s `max_order`
pub fn determinant<T, M>(a: &M) -> Result<T, MatrixError>
where
    T: Scalar,
    M: MatShape + MatrixGet<T> + Sync,
{
    determinant_with(a, &DetOptions::default())
}

/// Determinant of a square matrix with explicit options, using the process-wide cache.
pub fn determinant_with<T, M>(a: &M, opts: &DetOptions) -> Result<T, MatrixError>
where
    T: Scalar,
    M: MatShape + MatrixGet<T> + Sync,
{
    PlanCache::global().determinant(a, opts)
}
