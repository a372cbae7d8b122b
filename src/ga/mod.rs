//! Evolutionary engine for binary knapsack solutions.
//!
//! A population of binary inclusion vectors evolved one generation at a
//! time: diversity check → optional repopulation → fitness-proportionate
//! selection → single-point crossover → per-bit mutation. The mutation
//! rate is mutable between generations so an external controller (see
//! [`crate::bandit`]) can tune it online.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Engine parameters (population size, mutation rate,
//!   repopulate threshold)
//! - [`GaEngine`]: Owns the population and performs one generation step
//!   per [`run_generation`](GaEngine::run_generation) call
//! - [`GenerationStats`]: Per-generation log entry
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation for
//!   binary chromosomes
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod engine;
pub mod operators;
mod types;

pub use config::GaConfig;
pub use engine::GaEngine;
pub use types::{Chromosome, GenerationStats};
