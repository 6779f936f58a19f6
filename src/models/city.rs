//! City type and the travel-cost capability.

use serde::{Deserialize, Serialize};

/// Anything that can report the cost of travelling to another location of
/// the same kind.
///
/// Costs must be non-negative. `f64::INFINITY` marks an edge that cannot be
/// travelled. Costs need not be symmetric.
///
/// # Examples
///
/// ```
/// use u_tsp::models::CostTo;
///
/// struct Stop(f64);
///
/// impl CostTo for Stop {
///     fn cost_to(&self, other: &Self) -> f64 {
///         (other.0 - self.0).abs()
///     }
/// }
///
/// assert_eq!(Stop(1.0).cost_to(&Stop(4.0)), 3.0);
/// ```
pub trait CostTo {
    /// Cost of travelling from `self` to `other`.
    fn cost_to(&self, other: &Self) -> f64;
}

/// A city on a plane with an elevation.
///
/// Travel cost is the straight-line distance plus the height climbed, so
/// going uphill costs more than coming back down.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, CostTo};
///
/// let low = City::new(0, 0.0, 0.0);
/// let high = City::new(1, 3.0, 4.0).with_elevation(2.0);
/// assert!((low.cost_to(&high) - 7.0).abs() < 1e-10);
/// assert!((high.cost_to(&low) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
    elevation: f64,
}

impl City {
    /// Creates a city at sea level.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            elevation: 0.0,
        }
    }

    /// Sets the elevation of this city.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// City ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Elevation.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Euclidean distance to another city, ignoring elevation.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl CostTo for City {
    fn cost_to(&self, other: &Self) -> f64 {
        let climb = (other.elevation - self.elevation).max(0.0);
        self.distance_to(other) + climb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_new() {
        let c = City::new(3, 10.0, 20.0);
        assert_eq!(c.id(), 3);
        assert_eq!(c.x(), 10.0);
        assert_eq!(c.y(), 20.0);
        assert_eq!(c.elevation(), 0.0);
    }

    #[test]
    fn test_city_distance() {
        let a = City::new(0, 0.0, 0.0);
        let b = City::new(1, 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_flat_is_symmetric() {
        let a = City::new(0, 1.0, 2.0);
        let b = City::new(1, 4.0, 6.0);
        assert!((a.cost_to(&b) - b.cost_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_cost_uphill_is_asymmetric() {
        let a = City::new(0, 0.0, 0.0).with_elevation(1.0);
        let b = City::new(1, 0.0, 1.0).with_elevation(4.0);
        assert!((a.cost_to(&b) - 4.0).abs() < 1e-10);
        assert!((b.cost_to(&a) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_city_serde() {
        let c = City::new(2, 1.5, -2.0).with_elevation(0.5);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: City = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(c, back);
    }
}
