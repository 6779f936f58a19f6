//! Domain model types for the travelling salesman problem.
//!
//! Provides cities with an asymmetric travel cost, the [`CostTo`] capability
//! that lets callers bring their own location type, and closed tours.

mod city;
mod tour;

pub use city::{City, CostTo};
pub use tour::Tour;
