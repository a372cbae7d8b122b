//! Evolutionary engine configuration.

/// Configuration for [`GaEngine`](super::GaEngine).
///
/// # Defaults
///
/// ```
/// use bandit_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.mutation_rate, 0.1);
/// assert_eq!(config.repopulate_threshold, 0.3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bandit_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.05)
///     .with_repopulate_threshold(0.4);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Configured (logical) number of individuals in the population.
    ///
    /// An odd size yields `population_size - 1` individuals after each
    /// generation, since offspring are produced in pairs.
    pub population_size: usize,

    /// Initial per-bit mutation probability (0.0–1.0).
    ///
    /// Mutable on the engine; the bandit controller overwrites it each
    /// round.
    pub mutation_rate: f64,

    /// Diversity threshold below which partial repopulation triggers
    /// (0.0–1.0).
    ///
    /// Diversity is the fraction of distinct individuals in the
    /// population; when it drops below this threshold, 30% of the
    /// population is replaced with fresh random individuals at the start
    /// of the next generation.
    pub repopulate_threshold: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.1,
            repopulate_threshold: 0.3,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the diversity threshold for repopulation.
    pub fn with_repopulate_threshold(mut self, threshold: f64) -> Self {
        self.repopulate_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.repopulate_threshold) {
            return Err(format!(
                "repopulate_threshold must be in [0, 1], got {}",
                self.repopulate_threshold
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
        let config = GaConfig::default();
        assert_eq!(config.population_size, 20);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.repopulate_threshold - 0.3).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_mutation_rate(0.25)
            .with_repopulate_threshold(0.5);
        assert_eq!(config.population_size, 50);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert!((config.repopulate_threshold - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_mutation_rate(2.0)
            .with_repopulate_threshold(-0.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert!((config.repopulate_threshold - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
    }
}
