//! Optimization loop configuration.

use crate::bandit::BanditConfig;
use crate::ga::GaConfig;

/// Configuration for [`EpisodeRunner`](super::EpisodeRunner).
///
/// The engine starts at `pop_size_min` individuals; the per-round
/// fitness-trend heuristic moves the size in ±5 steps within
/// `[pop_size_min, pop_size_max]`.
///
/// # Defaults
///
/// ```
/// use bandit_ga::env::EnvConfig;
///
/// let config = EnvConfig::default();
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.pop_size_min, 10);
/// assert_eq!(config.pop_size_max, 50);
/// assert!(config.seed.is_none());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvConfig {
    /// Number of rounds to run.
    pub generations: usize,

    /// Lower bound of the population-size range (also the starting size).
    pub pop_size_min: usize,

    /// Upper bound of the population-size range.
    pub pop_size_max: usize,

    /// Engine parameters. The population size in here is superseded by
    /// `pop_size_min` at episode start.
    pub ga: GaConfig,

    /// Bandit controller parameters.
    pub bandit: BanditConfig,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            generations: 50,
            pop_size_min: 10,
            pop_size_max: 50,
            ga: GaConfig::default(),
            bandit: BanditConfig::default(),
            seed: None,
        }
    }
}

impl EnvConfig {
    /// Sets the number of rounds.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population-size range.
    pub fn with_pop_size_range(mut self, min: usize, max: usize) -> Self {
        self.pop_size_min = min;
        self.pop_size_max = max;
        self
    }

    /// Sets the engine parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Sets the bandit parameters.
    pub fn with_bandit(mut self, bandit: BanditConfig) -> Self {
        self.bandit = bandit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, including the sub-configurations.
    pub fn validate(&self) -> Result<(), String> {
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.pop_size_min < 2 {
            return Err("pop_size_min must be at least 2".into());
        }
        if self.pop_size_min > self.pop_size_max {
            return Err(format!(
                "pop_size_min ({}) must not exceed pop_size_max ({})",
                self.pop_size_min, self.pop_size_max
            ));
        }
        self.ga.validate()?;
        self.bandit.validate()?;
        Ok(())
    }
}
