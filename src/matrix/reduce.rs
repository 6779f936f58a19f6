//! Row-and-column matrix reduction.
//!
//! # Algorithm
//!
//! 1. For every row, subtract the row's minimum finite entry from each entry
//!    of that row. Rows with no finite entry are left alone.
//! 2. On the row-reduced matrix, do the same for every column.
//!
//! The sum of everything subtracted is a lower bound on the cost of any
//! Hamiltonian cycle through the matrix: each row must be left exactly once
//! and each column entered exactly once, so every subtracted minimum is paid.
//!
//! # Complexity
//!
//! O(n²).
//!
//! # Reference
//!
//! Little, J.D.C., Murty, K.G., Sweeney, D.W., Karel, C. (1963). "An
//! algorithm for the traveling salesman problem", *Operations Research*
//! 11(6), 972-989.

use super::CostMatrix;

/// Reduces a copy of `matrix`, returning `(reduced, reduction_total)`.
///
/// Every row and column of `reduced` that has a finite entry has minimum 0.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::{reduce, CostMatrix};
///
/// let inf = f64::INFINITY;
/// let m = CostMatrix::from_rows(&[
///     vec![inf, 10.0, 15.0, 20.0],
///     vec![5.0, inf, 9.0, 10.0],
///     vec![6.0, 13.0, inf, 12.0],
///     vec![8.0, 8.0, 9.0, inf],
/// ]).unwrap();
/// let (reduced, total) = reduce(&m);
/// // rows: 10 + 5 + 6 + 8, then column 2 still needs 1 and column 3 needs 5
/// assert_eq!(total, 35.0);
/// assert_eq!(reduced.get(0, 1), 0.0);
/// ```
pub fn reduce(matrix: &CostMatrix) -> (CostMatrix, f64) {
    let mut reduced = matrix.clone();
    let total = reduce_in_place(&mut reduced);
    (reduced, total)
}

/// Reduces `matrix` in place and returns the total amount subtracted.
pub fn reduce_in_place(matrix: &mut CostMatrix) -> f64 {
    let n = matrix.size();
    let mut total = 0.0;

    for i in 0..n {
        let min = matrix.row(i).iter().copied().fold(f64::INFINITY, f64::min);
        if min.is_finite() && min > 0.0 {
            for j in 0..n {
                let c = matrix.get(i, j);
                matrix.set(i, j, c - min);
            }
            total += min;
        }
    }

    // Column minima are taken on the row-reduced matrix.
    for j in 0..n {
        let min = (0..n).map(|i| matrix.get(i, j)).fold(f64::INFINITY, f64::min);
        if min.is_finite() && min > 0.0 {
            for i in 0..n {
                let c = matrix.get(i, j);
                matrix.set(i, j, c - min);
            }
            total += min;
        }
    }

    total
}
