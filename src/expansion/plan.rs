//! Symbolic Laplace expansion plans.
//!
//! A plan for order N is the cofactor expansion of an N x N determinant along the first
//! row, recursively down to 1 x 1 minors, with every matrix entry replaced by its
//! coordinates. Plans hold no values: the same plan is evaluated against any matrix of
//! order N (see [`super::eval`]).

use crate::utils::range;

/// A cell to be read at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub row: usize,
    pub col: usize,
}

impl ElementRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Sign of a cofactor term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `(-1)^k`.
    pub fn alternating(k: usize) -> Self {
        if k % 2 == 0 { Sign::Plus } else { Sign::Minus }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Minus
    }
}

/// One term of an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionNode {
    /// 1 x 1 minor: the entry itself.
    Leaf(ElementRef),
    /// `sign * A[element] * det(minor)`, where `minor` is the expansion of the submatrix
    /// left after deleting `element`'s row and column.
    Product {
        sign: Sign,
        element: ElementRef,
        minor: Vec<ExpansionNode>,
    },
}

impl ExpansionNode {
    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        match self {
            ExpansionNode::Leaf(_) => 1,
            ExpansionNode::Product { minor, .. } => {
                1 + minor.iter().map(ExpansionNode::node_count).sum::<usize>()
            }
        }
    }
}

/// The full expansion for one matrix order: the top-level sum over row-0 columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    order: usize,
    terms: Vec<ExpansionNode>,
}

impl Expansion {
    /// Builds the plan for `order x order` matrices. `order` 0 yields an empty plan.
    pub fn build(order: usize) -> Self {
        let terms = if order == 0 {
            Vec::new()
        } else {
            build(&range::columns(order), 0)
        };
        Self { order, terms }
    }

    /// Matrix order this plan applies to.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Top-level terms, in ascending column order.
    pub fn terms(&self) -> &[ExpansionNode] {
        &self.terms
    }

    pub fn node_count(&self) -> usize {
        self.terms.iter().map(ExpansionNode::node_count).sum()
    }
}

/// Expands the minor made of rows `depth..` and the columns in `columns`.
///
/// `columns` must be ascending and non-empty. The term for the k-th remaining column is
/// signed `(-1)^k`: row `depth` is row 0 of the minor and `k` is the column's position
/// inside it.
pub fn build(columns: &[usize], depth: usize) -> Vec<ExpansionNode> {
    if let [c] = columns {
        return vec![ExpansionNode::Leaf(ElementRef::new(depth, *c))];
    }
    columns
        .iter()
        .enumerate()
        .map(|(k, &c)| ExpansionNode::Product {
            sign: Sign::alternating(k),
            element: ElementRef::new(depth, c),
            minor: build(&range::without(columns, c), depth + 1),
        })
        .collect()
}
