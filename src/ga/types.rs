//! Core types for the evolutionary engine.

/// A candidate solution: one bit per item, `true` = included.
///
/// Length always equals the item count of the problem instance.
pub type Chromosome = Vec<bool>;

/// Per-generation statistics recorded by the engine.
///
/// Appended once per [`run_generation`](super::GaEngine::run_generation)
/// call; entries are read-only once appended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index as passed by the caller.
    pub generation: usize,
    /// Best fitness in the population after this generation.
    pub best_fitness: f64,
    /// Mean fitness of the population after this generation.
    pub avg_fitness: f64,
    /// Mutation rate in effect during this generation.
    pub mutation_rate: f64,
    /// Population length after this generation (one less than the
    /// configured size when the configured size is odd).
    pub population_size: usize,
}
