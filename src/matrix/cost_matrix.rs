//! Dense asymmetric cost matrix.

use crate::error::{TspError, TspResult};
use crate::models::CostTo;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Entry `(i, j)` is the cost of travelling from city `i` to city `j`.
/// The diagonal is always `f64::INFINITY` and so is any edge that cannot
/// be travelled.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::matrix::CostMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let m = CostMatrix::from_cities(&cities).unwrap();
/// assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(m.get(1, 1).is_infinite());
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with every entry infinite.
    pub fn infinite(size: usize) -> Self {
        Self {
            data: vec![f64::INFINITY; size * size],
            size,
        }
    }

    /// Builds the matrix from `cities[i].cost_to(&cities[j])`.
    ///
    /// Fails with [`TspError::InvalidInput`] for fewer than two cities and
    /// with [`TspError::NegativeCost`] if the cost function reports a
    /// negative or NaN cost.
    pub fn from_cities<C: CostTo>(cities: &[C]) -> TspResult<Self> {
        let n = cities.len();
        if n < 2 {
            return Err(TspError::InvalidInput { cities: n });
        }
        let mut m = Self::infinite(n);
        for (i, from) in cities.iter().enumerate() {
            for (j, to) in cities.iter().enumerate() {
                if i != j {
                    m.set(i, j, checked_cost(i, j, from.cost_to(to))?);
                }
            }
        }
        Ok(m)
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// Diagonal entries are overwritten with infinity.
    pub fn from_data(size: usize, data: Vec<f64>) -> TspResult<Self> {
        if size < 2 {
            return Err(TspError::InvalidInput { cities: size });
        }
        if data.len() != size * size {
            return Err(TspError::DimensionMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        let mut m = Self { data, size };
        for i in 0..size {
            for j in 0..size {
                if i == j {
                    m.set(i, i, f64::INFINITY);
                } else {
                    checked_cost(i, j, m.get(i, j))?;
                }
            }
        }
        Ok(m)
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::matrix::CostMatrix;
    ///
    /// let inf = f64::INFINITY;
    /// let m = CostMatrix::from_rows(&[
    ///     vec![inf, 1.0],
    ///     vec![2.0, inf],
    /// ]).unwrap();
    /// assert_eq!(m.get(1, 0), 2.0);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> TspResult<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(TspError::DimensionMismatch {
                expected: n,
                actual: bad.len(),
            });
        }
        Self::from_data(n, rows.concat())
    }

    /// Returns the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`.
    #[inline]
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Sets every entry of row `i` to infinity.
    pub fn block_row(&mut self, i: usize) {
        let n = self.size;
        self.data[i * n..(i + 1) * n].fill(f64::INFINITY);
    }

    /// Sets every entry of column `j` to infinity.
    pub fn block_col(&mut self, j: usize) {
        for i in 0..self.size {
            self.set(i, j, f64::INFINITY);
        }
    }

    /// Returns `true` if row `i` has at least one finite entry.
    pub fn has_finite_in_row(&self, i: usize) -> bool {
        self.row(i).iter().any(|c| c.is_finite())
    }

    /// Returns `true` if column `j` has at least one finite entry.
    pub fn has_finite_in_col(&self, j: usize) -> bool {
        (0..self.size).any(|i| self.get(i, j).is_finite())
    }

    /// Overwrites this matrix with the contents of `other` without
    /// reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn copy_from(&mut self, other: &CostMatrix) {
        assert_eq!(self.size, other.size, "matrix sizes must match");
        self.data.copy_from_slice(&other.data);
    }

    /// Returns the cheapest finite successor of `from` among `candidates`.
    ///
    /// Returns `None` if no candidate is reachable.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&c| self.get(from, c).is_finite())
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Cost of the closed cycle visiting `order` and returning to its first
    /// element. Infinite if any edge is.
    pub fn cycle_cost(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let closing = self.get(order[order.len() - 1], order[0]);
        order
            .windows(2)
            .map(|w| self.get(w[0], w[1]))
            .sum::<f64>()
            + closing
    }
}

fn checked_cost(from: usize, to: usize, cost: f64) -> TspResult<f64> {
    if cost.is_nan() || cost < 0.0 {
        return Err(TspError::NegativeCost { from, to, cost });
    }
    Ok(cost)
}
