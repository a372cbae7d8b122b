//! UCB1 agent: per-arm statistics and action selection.

use super::config::BanditConfig;

/// One controller-scoped log entry, appended per reward update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmLog {
    /// Round index as passed by the caller.
    pub generation: usize,
    /// The mutation rate of the rewarded arm.
    pub action: f64,
    /// The reward credited to the arm this round. May be negative.
    pub reward: f64,
    /// The arm's pull count after this update.
    pub times_chosen: usize,
}

/// UCB1 multi-armed bandit over a fixed set of mutation-rate arms.
///
/// Arms are addressed by index into the configured arm set. Per-arm
/// state is a cumulative (signed) reward and a pull count; both only
/// grow for the lifetime of one run. There is no terminal state — the
/// agent runs for as many rounds as the driving loop asks.
///
/// # Examples
///
/// ```
/// use bandit_ga::bandit::{BanditConfig, UcbAgent};
///
/// let mut agent = UcbAgent::new(&BanditConfig::default());
/// let action = agent.select_action();
/// assert_eq!(action, 0); // unpulled arms win in enumeration order
/// agent.update_action_reward(action, 12.0, 0);
/// assert_eq!(agent.pull_count(action), 1);
/// ```
pub struct UcbAgent {
    arms: Vec<f64>,
    rewards: Vec<f64>,
    counts: Vec<usize>,
    total_trials: usize,
    exploration_weight: f64,
    logs: Vec<ArmLog>,
}

impl UcbAgent {
    /// Creates an agent with zeroed per-arm statistics.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`BanditConfig::validate`] first to get a descriptive error).
    pub fn new(config: &BanditConfig) -> Self {
        config.validate().expect("invalid BanditConfig");
        let n = config.arms.len();
        Self {
            arms: config.arms.clone(),
            rewards: vec![0.0; n],
            counts: vec![0; n],
            total_trials: 0,
            exploration_weight: config.exploration_weight,
            logs: Vec::new(),
        }
    }

    /// Selects an arm by the UCB1 rule and returns its index.
    ///
    /// Increments the total-trials counter. Arms never pulled score
    /// `f64::INFINITY`, so every arm is tried once before any
    /// exploitation; otherwise the score is the arm's average reward
    /// plus `sqrt(exploration_weight * ln(total_trials) / pull_count)`.
    /// Ties resolve to the first maximal arm in enumeration order.
    pub fn select_action(&mut self) -> usize {
        self.total_trials += 1;

        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for index in 0..self.arms.len() {
            let score = if self.counts[index] == 0 {
                f64::INFINITY
            } else {
                let pulls = self.counts[index] as f64;
                let avg_reward = self.rewards[index] / pulls;
                let exploration_bonus =
                    (self.exploration_weight * (self.total_trials as f64).ln() / pulls).sqrt();
                avg_reward + exploration_bonus
            };
            // Strict comparison keeps the first maximal arm on ties.
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        best_index
    }

    /// Credits `reward` to the arm (no clamping — negative rewards are
    /// valid data), increments its pull count, and appends a log entry.
    ///
    /// # Panics
    /// Panics if `action` is out of range.
    pub fn update_action_reward(&mut self, action: usize, reward: f64, generation: usize) {
        self.rewards[action] += reward;
        self.counts[action] += 1;
        self.logs.push(ArmLog {
            generation,
            action: self.arms[action],
            reward,
            times_chosen: self.counts[action],
        });
    }

    /// The mutation rate of an arm.
    pub fn action_value(&self, action: usize) -> f64 {
        self.arms[action]
    }

    /// The arm set, in fixed enumeration order.
    pub fn arms(&self) -> &[f64] {
        &self.arms
    }

    /// How many times an arm has been rewarded.
    pub fn pull_count(&self, action: usize) -> usize {
        self.counts[action]
    }

    /// The arm's cumulative signed reward.
    pub fn cumulative_reward(&self, action: usize) -> f64 {
        self.rewards[action]
    }

    /// Number of `select_action` calls so far.
    pub fn total_trials(&self) -> usize {
        self.total_trials
    }

    /// The accumulated controller-scoped log entries, in round order.
    pub fn logs(&self) -> &[ArmLog] {
        &self.logs
    }

    /// Consumes the agent, returning its log sequence.
    pub fn into_logs(self) -> Vec<ArmLog> {
        self.logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_arm_agent() -> UcbAgent {
        UcbAgent::new(&BanditConfig::default().with_arms(vec![0.0, 0.1]))
    }

    #[test]
    fn test_every_arm_tried_once_in_enumeration_order() {
        let mut agent = UcbAgent::new(&BanditConfig::default());
        for expected in 0..30 {
            let action = agent.select_action();
            assert_eq!(action, expected, "unpulled arms must win in order");
            agent.update_action_reward(action, 0.0, expected);
        }
        assert_eq!(agent.total_trials(), 30);
    }

    #[test]
    fn test_tie_resolves_to_first_arm() {
        let mut agent = UcbAgent::new(&BanditConfig::default());
        for generation in 0..30 {
            let action = agent.select_action();
            agent.update_action_reward(action, 0.0, generation);
        }
        // All arms: count 1, reward 0 — identical scores. First arm wins.
        assert_eq!(agent.select_action(), 0);
    }

    #[test]
    fn test_update_accounting() {
        let mut agent = two_arm_agent();
        agent.update_action_reward(1, 5.0, 0);
        agent.update_action_reward(1, -2.0, 1);

        assert_eq!(agent.pull_count(1), 2);
        assert!((agent.cumulative_reward(1) - 3.0).abs() < 1e-12);
        assert_eq!(agent.pull_count(0), 0);
        assert_eq!(agent.cumulative_reward(0), 0.0);
    }

    #[test]
    fn test_negative_rewards_lower_average() {
        let mut agent = two_arm_agent();
        for generation in 0..5 {
            agent.update_action_reward(0, 1.0, generation);
            agent.update_action_reward(1, -1.0, generation);
        }
        let avg0 = agent.cumulative_reward(0) / agent.pull_count(0) as f64;
        let avg1 = agent.cumulative_reward(1) / agent.pull_count(1) as f64;
        assert!((avg0 - 1.0).abs() < 1e-12);
        assert!((avg1 + 1.0).abs() < 1e-12);
        assert!(avg1 < avg0);
    }

    #[test]
    fn test_exploitation_prefers_rewarded_arm() {
        let mut agent = two_arm_agent();
        // Equal pull counts, far apart averages: the exploration bonus is
        // identical, so the rewarded arm must win.
        for generation in 0..10 {
            agent.select_action();
            agent.update_action_reward(0, -1.0, generation);
            agent.select_action();
            agent.update_action_reward(1, 1.0, generation);
        }
        assert_eq!(agent.select_action(), 1);
    }

    #[test]
    fn test_unpulled_arm_dominates_rewarded_arm() {
        let mut agent = two_arm_agent();
        agent.select_action();
        agent.update_action_reward(0, 1000.0, 0);
        // Arm 1 has never been pulled; its unbounded score must win.
        assert_eq!(agent.select_action(), 1);
    }

    #[test]
    fn test_logs_record_rounds_in_order() {
        let mut agent = two_arm_agent();
        agent.update_action_reward(0, 2.0, 0);
        agent.update_action_reward(1, -0.5, 1);
        agent.update_action_reward(0, 0.0, 2);

        let logs = agent.logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].generation, 0);
        assert_eq!(logs[0].action, 0.0);
        assert_eq!(logs[0].times_chosen, 1);
        assert_eq!(logs[1].action, 0.1);
        assert_eq!(logs[1].reward, -0.5);
        assert_eq!(logs[2].times_chosen, 2);
    }

    #[test]
    #[should_panic(expected = "invalid BanditConfig")]
    fn test_new_rejects_invalid_config() {
        UcbAgent::new(&BanditConfig::default().with_arms(vec![]));
    }
}
