//! Cost matrices and their reduction.
//!
//! Provides the dense asymmetric cost matrix and the row/column reduction
//! that yields branch-and-bound lower bounds.

mod cost_matrix;
mod reduce;

pub use cost_matrix::CostMatrix;
pub use reduce::{reduce, reduce_in_place};
