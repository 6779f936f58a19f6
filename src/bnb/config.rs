//! Branch-and-bound configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{TspError, TspResult};

/// Heuristic used to seed the incumbent before the search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeedHeuristic {
    /// Nearest-neighbor from every start, falling back to random tours.
    #[default]
    NearestNeighbor,
    /// Random permutations only.
    Random,
    /// No seed; the first incumbent comes from the search itself.
    None,
}

/// Configuration parameters for the branch-and-bound search.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::{BnbConfig, SeedHeuristic};
///
/// let config = BnbConfig::default()
///     .with_time_limit_ms(5_000)
///     .with_seed_heuristic(SeedHeuristic::Random)
///     .with_seed(7);
/// assert_eq!(config.time_limit_ms, Some(5_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnbConfig {
    /// Optional wall-clock time limit in milliseconds.
    ///
    /// When the limit is reached the best tour found so far is returned and
    /// the result is marked as timed out. `None` searches to completion.
    pub time_limit_ms: Option<u64>,
    /// Discard states whose lower bound cannot beat the incumbent.
    ///
    /// Turning this off explores the full tree; only useful for testing.
    pub pruning: bool,
    /// Incumbent seeding heuristic.
    pub seed_heuristic: SeedHeuristic,
    /// Maximum number of random permutations tried while seeding.
    pub random_attempts: usize,
    /// Random seed (None uses a fixed default).
    pub seed: Option<u64>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: None,
            pruning: true,
            seed_heuristic: SeedHeuristic::NearestNeighbor,
            random_attempts: 1_000,
            seed: None,
        }
    }
}

impl BnbConfig {
    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the wall-clock time limit from fractional seconds.
    ///
    /// `f64::INFINITY` removes the limit. Zero, negative and NaN budgets are
    /// stored as zero and rejected by [`validate`](Self::validate).
    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit_ms = if secs == f64::INFINITY {
            None
        } else if secs > 0.0 {
            Some((secs * 1000.0).ceil() as u64)
        } else {
            Some(0)
        };
        self
    }

    /// Enables or disables pruning against the incumbent.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Sets the incumbent seeding heuristic.
    pub fn with_seed_heuristic(mut self, heuristic: SeedHeuristic) -> Self {
        self.seed_heuristic = heuristic;
        self
    }

    /// Sets the random permutation budget used while seeding.
    pub fn with_random_attempts(mut self, attempts: usize) -> Self {
        self.random_attempts = attempts;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The time limit as a [`Duration`], if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.time_limit_ms == Some(0) {
            return Err(TspError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BnbConfig::default();
        assert_eq!(config.time_limit_ms, None);
        assert!(config.pruning);
        assert_eq!(config.seed_heuristic, SeedHeuristic::NearestNeighbor);
        assert_eq!(config.random_attempts, 1_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = BnbConfig::default()
            .with_time_limit_ms(250)
            .with_pruning(false)
            .with_seed_heuristic(SeedHeuristic::None)
            .with_random_attempts(3)
            .with_seed(9);
        assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
        assert!(!config.pruning);
        assert_eq!(config.seed_heuristic, SeedHeuristic::None);
        assert_eq!(config.random_attempts, 3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_time_limit_secs() {
        let config = BnbConfig::default().with_time_limit_secs(1.5);
        assert_eq!(config.time_limit_ms, Some(1_500));
        let bad = BnbConfig::default().with_time_limit_secs(-1.0);
        assert_eq!(bad.time_limit_ms, Some(0));
        assert!(bad.validate().is_err());
        let unbounded = BnbConfig::default().with_time_limit_secs(f64::INFINITY);
        assert_eq!(unbounded.time_limit_ms, None);
    }

    #[test]
    fn test_zero_time_limit_invalid() {
        let config = BnbConfig::default().with_time_limit_ms(0);
        assert!(matches!(config.validate(), Err(TspError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = BnbConfig::default().with_time_limit_ms(10).with_seed(1);
        let json = serde_json::to_string(&config).expect("serialize");
        let back: BnbConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, back);
    }
}
