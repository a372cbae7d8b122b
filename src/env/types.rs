//! Loop-scoped log types.

/// One loop-scoped log entry, appended per round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundLog {
    /// Round (generation) index, starting at 0.
    pub generation: usize,
    /// Best fitness observed so far across all rounds. Non-decreasing.
    pub best_fitness: f64,
    /// Mean fitness of the evolved population this round, before it is
    /// discarded and regenerated.
    pub avg_fitness: f64,
    /// Mutation rate chosen by the bandit for this round.
    pub mutation_rate: f64,
    /// Configured population size after this round's adjustment.
    pub population_size: usize,
    /// Bandit reward for this round: generation best minus the global
    /// best carried from before the round. May be negative.
    pub reward: f64,
}
