//! Bandit controller configuration.

/// Configuration for [`UcbAgent`](super::UcbAgent).
///
/// # Defaults
///
/// ```
/// use bandit_ga::bandit::BanditConfig;
///
/// let config = BanditConfig::default();
/// assert_eq!(config.arms.len(), 30);
/// assert_eq!(config.arms[0], 0.0);
/// assert_eq!(config.arms[29], 0.29);
/// assert_eq!(config.exploration_weight, 2.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BanditConfig {
    /// Candidate mutation rates, one per arm, in fixed enumeration order.
    ///
    /// Tie-breaking in arm selection resolves to the first maximal arm in
    /// this order, so the order is part of the reproducibility contract.
    pub arms: Vec<f64>,

    /// Exploration weight in the UCB1 bonus term
    /// `sqrt(weight * ln(trials) / pulls)`. Higher values explore more.
    pub exploration_weight: f64,
}

impl Default for BanditConfig {
    fn default() -> Self {
        Self {
            arms: Self::default_arms(),
            exploration_weight: 2.0,
        }
    }
}

impl BanditConfig {
    /// The default arm set: 30 mutation rates from 0.00 to 0.29 in steps
    /// of 0.01.
    pub fn default_arms() -> Vec<f64> {
        (0..30).map(|i| i as f64 / 100.0).collect()
    }

    /// Sets the arm set.
    pub fn with_arms(mut self, arms: Vec<f64>) -> Self {
        self.arms = arms;
        self
    }

    /// Sets the exploration weight.
    pub fn with_exploration_weight(mut self, weight: f64) -> Self {
        self.exploration_weight = weight;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.arms.is_empty() {
            return Err("arm set must not be empty".into());
        }
        for (i, &arm) in self.arms.iter().enumerate() {
            if !arm.is_finite() || !(0.0..=1.0).contains(&arm) {
                return Err(format!("arm {i} has invalid mutation rate {arm}"));
            }
        }
        if !self.exploration_weight.is_finite() || self.exploration_weight <= 0.0 {
            return Err(format!(
                "exploration_weight must be positive, got {}",
                self.exploration_weight
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arms() {
        let arms = BanditConfig::default_arms();
        assert_eq!(arms.len(), 30);
        for (i, &arm) in arms.iter().enumerate() {
            assert!((arm - i as f64 / 100.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_default_validates() {
        assert!(BanditConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_arms() {
        assert!(BanditConfig::default().with_arms(vec![]).validate().is_err());
    }

    #[test]
    fn test_validate_out_of_range_arm() {
        let config = BanditConfig::default().with_arms(vec![0.1, 1.5]);
        assert!(config.validate().is_err());

        let config = BanditConfig::default().with_arms(vec![f64::NAN]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_exploration_weight() {
        assert!(BanditConfig::default()
            .with_exploration_weight(0.0)
            .validate()
            .is_err());
        assert!(BanditConfig::default()
            .with_exploration_weight(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = BanditConfig::default()
            .with_arms(vec![0.05, 0.1])
            .with_exploration_weight(1.5);
        assert_eq!(config.arms, vec![0.05, 0.1]);
        assert!((config.exploration_weight - 1.5).abs() < 1e-12);
    }
}
