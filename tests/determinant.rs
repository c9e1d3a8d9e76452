//! Tests for the cofactor-expansion determinant: literal values, algebraic properties
//! and error handling.
//!
//! Integer matrices are checked exactly; the multiplicative property is checked on
//! random floating-point matrices within a tolerance.

use approx::assert_abs_diff_eq;
use cofactor::{determinant, determinant_with, DetOptions, Matrix, MatrixError, PlanCache};
use faer::Mat;
use rand::Rng;

fn m(rows: Vec<Vec<i64>>) -> Matrix<i64> {
    Matrix::from_rows(rows).unwrap()
}

/// Random n x n matrix with small integer entries.
fn random_int(n: usize) -> Matrix<i64> {
    let mut rng = rand::thread_rng();
    Matrix::create(n, n, |_, _| rng.gen_range(-9..=9))
}

fn random_f64(n: usize) -> Matrix<f64> {
    let mut rng = rand::thread_rng();
    Matrix::create(n, n, |_, _| rng.r#gen())
}

fn swap_rows(a: &Matrix<i64>, r1: usize, r2: usize) -> Matrix<i64> {
    Matrix::create(a.nrows(), a.ncols(), |i, j| {
        let src = if i == r1 {
            r2
        } else if i == r2 {
            r1
        } else {
            i
        };
        a[(src, j)]
    })
}

/// Textbook recursive expansion over explicit minors, used as an independent reference.
fn reference_det(a: &Matrix<i64>) -> i64 {
    if a.nrows() == 1 {
        return a[(0, 0)];
    }
    (0..a.ncols())
        .map(|j| {
            let sign = if j % 2 == 0 { 1 } else { -1 };
            sign * a[(0, j)] * reference_det(&a.minor(0, j).unwrap())
        })
        .sum()
}

#[test]
fn literal_values() {
    assert_eq!(determinant(&m(vec![vec![5, 4, 1], vec![1, 3, 4], vec![4, 4, 5]])), Ok(31));
    assert_eq!(determinant(&m(vec![vec![1]])), Ok(1));
    assert_eq!(determinant(&m(vec![vec![7]])), Ok(7));
    assert_eq!(determinant(&m(vec![vec![1, 0], vec![0, 1]])), Ok(1));
    assert_eq!(determinant(&m(vec![vec![2, 0], vec![0, 3]])), Ok(6));
    assert_eq!(determinant(&m(vec![vec![0, 1], vec![1, 0]])), Ok(-1));
}

#[test]
fn identity_has_unit_determinant() {
    for n in 1..=7 {
        assert_eq!(determinant(&Matrix::<i64>::identity(n)), Ok(1), "order {n}");
    }
}

#[test]
fn matches_reference_expansion() {
    for n in 1..=6 {
        let a = random_int(n);
        assert_eq!(determinant(&a), Ok(reference_det(&a)), "order {n}");
    }
}

#[test]
fn transpose_invariance() {
    for n in 1..=6 {
        let a = random_int(n);
        assert_eq!(determinant(&a), determinant(&a.transpose()));
    }
}

#[test]
fn row_and_column_swaps_flip_sign() {
    let a = random_int(5);
    let d = determinant(&a).unwrap();
    assert_eq!(determinant(&swap_rows(&a, 0, 3)), Ok(-d));
    assert_eq!(determinant(&swap_rows(&a, 1, 2)), Ok(-d));
    let col_swapped = swap_rows(&a.transpose(), 0, 4).transpose();
    assert_eq!(determinant(&col_swapped), Ok(-d));
}

#[test]
fn scaling_a_row_scales_determinant() {
    let a = random_int(4);
    let d = determinant(&a).unwrap();
    let k = 3;
    let scaled = a.map(|v, i, _| if i == 2 { k * v } else { v });
    assert_eq!(determinant(&scaled), Ok(k * d));
}

#[test]
fn multiplicative_property() {
    for n in 1..=5 {
        let a = random_f64(n);
        let b = random_f64(n);
        let ab = a.multiply(&b).unwrap();
        let lhs: f64 = determinant(&ab).unwrap();
        let rhs = determinant(&a).unwrap() * determinant(&b).unwrap();
        assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-10);
    }
}

#[test]
fn cached_plan_does_not_leak_values() {
    let a = m(vec![vec![5, 4, 1], vec![1, 3, 4], vec![4, 4, 5]]);
    let b = m(vec![vec![2, 0, 0], vec![0, 3, 0], vec![0, 0, 4]]);
    assert_eq!(determinant(&a), Ok(31));
    assert_eq!(determinant(&b), Ok(24));
    assert_eq!(determinant(&a), Ok(31));
    assert!(PlanCache::global().contains(3));
}

#[test]
fn set_does_not_alias_input() {
    let a = Matrix::<i64>::identity(4);
    let b = a.set(2, 2, 9).unwrap();
    assert_eq!(determinant(&b), Ok(9));
    assert_eq!(determinant(&a), Ok(1));
}

#[test]
fn non_square_input_is_invalid_shape() {
    let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(
        determinant(&a),
        Err(MatrixError::InvalidShape { nrows: 2, ncols: 3 })
    );
    let empty = Matrix::<i64>::from_rows(Vec::new()).unwrap();
    assert_eq!(
        determinant(&empty),
        Err(MatrixError::InvalidShape { nrows: 0, ncols: 0 })
    );
}

#[test]
fn minor_rejects_out_of_bounds_indices() {
    let a = Matrix::<i64>::identity(2);
    assert_eq!(
        a.minor(5, 0),
        Err(MatrixError::IndexOutOfRange {
            row: 5,
            col: 0,
            nrows: 2,
            ncols: 2
        })
    );
    assert_eq!(determinant(&a.minor(1, 1).unwrap()), Ok(1));
}

#[test]
fn order_limit_is_configurable() {
    let a = Matrix::<i64>::identity(4);
    let opts = DetOptions::default().with_max_order(3);
    assert_eq!(
        determinant_with(&a, &opts),
        Err(MatrixError::OrderTooLarge { order: 4, max: 3 })
    );
    let wide = DetOptions::default().with_max_order(4);
    assert_eq!(determinant_with(&a, &wide), Ok(1));
}

#[test]
fn private_cache_matches_global() {
    let cache = PlanCache::new();
    let opts = DetOptions::default().with_parallel_threshold(2);
    let a = random_int(5);
    assert_eq!(cache.determinant(&a, &opts), determinant(&a));
    assert!(cache.contains(5));
    assert_eq!(cache.len(), 1);
}

#[test]
fn evaluates_faer_matrices() {
    let a = m(vec![vec![5, 4, 1], vec![1, 3, 4], vec![4, 4, 5]]).map(|v, _, _| v as f64);
    let f: Mat<f64> = a.to_faer();
    let d: f64 = determinant(&f).unwrap();
    assert_abs_diff_eq!(d, 31.0, epsilon = 1e-12);
    let view: f64 = determinant(&f.as_ref()).unwrap();
    assert_abs_diff_eq!(view, 31.0, epsilon = 1e-12);
}
