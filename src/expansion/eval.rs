//! Plan interpreter: substitutes matrix entries into an expansion and sums it.

use crate::core::traits::{MatShape, MatrixGet, Scalar};
use crate::error::MatrixError;
use crate::expansion::plan::{Expansion, ExpansionNode};

/// Evaluates `plan` against `a`, returning the sum of its top-level terms.
///
/// `a` must be `order x order` for the plan's order, and the order must be at least 1.
/// A plan larger than the matrix is reported as `IndexOutOfRange` at its furthest
/// reference; an empty plan or any other mismatch is `InvalidShape`. `a` is only read.
pub fn evaluate<T, M>(plan: &Expansion, a: &M) -> Result<T, MatrixError>
where
    T: Scalar,
    M: MatShape + MatrixGet<T>,
{
    check_order(plan, a)?;
    Ok(sum(plan.terms(), a))
}

/// Like [`evaluate`], with the top-level terms evaluated on the Rayon pool.
///
/// Floating-point results may differ from [`evaluate`] in the last bits since the
/// terms are summed in a different order.
#[cfg(feature = "rayon")]
pub fn evaluate_parallel<T, M>(plan: &Expansion, a: &M) -> Result<T, MatrixError>
where
    T: Scalar,
    M: MatShape + MatrixGet<T> + Sync,
{
    use rayon::prelude::*;

    check_order(plan, a)?;
    Ok(plan
        .terms()
        .par_iter()
        .map(|node| evaluate_node(node, a))
        .reduce(T::zero, |acc, v| acc + v))
}

fn check_order<M: MatShape>(plan: &Expansion, a: &M) -> Result<(), MatrixError> {
    let n = plan.order();
    let (nrows, ncols) = a.shape();
    if n == 0 {
        return Err(MatrixError::InvalidShape { nrows, ncols });
    }
    if (nrows, ncols) == (n, n) {
        return Ok(());
    }
    if n > nrows || n > ncols {
        return Err(MatrixError::IndexOutOfRange {
            row: n - 1,
            col: n - 1,
            nrows,
            ncols,
        });
    }
    Err(MatrixError::InvalidShape { nrows, ncols })
}

fn sum<T, M>(nodes: &[ExpansionNode], a: &M) -> T
where
    T: Scalar,
    M: MatrixGet<T>,
{
    nodes
        .iter()
        .fold(T::zero(), |acc, node| acc + evaluate_node(node, a))
}

fn evaluate_node<T, M>(node: &ExpansionNode, a: &M) -> T
where
    T: Scalar,
    M: MatrixGet<T>,
{
    match node {
        ExpansionNode::Leaf(e) => a.entry(e.row, e.col),
        ExpansionNode::Product {
            sign,
            element,
            minor,
        } => {
            let term = a.entry(element.row, element.col) * sum(minor, a);
            if sign.is_negative() {
                T::zero() - term
            } else {
                term
            }
        }
    }
}
