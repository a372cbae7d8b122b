//! Optimization loop coupling the evolutionary engine and the bandit.
//!
//! [`EpisodeRunner`] drives a fixed number of rounds over one
//! [`GaEngine`](crate::ga::GaEngine) and one
//! [`UcbAgent`](crate::bandit::UcbAgent) sharing one problem instance.
//! Per round: the bandit picks the mutation rate, the engine evolves one
//! generation, the fitness improvement becomes the bandit's reward, and
//! a fitness-trend heuristic resizes the population. The evolved
//! population is then discarded and regenerated at the adjusted size —
//! only the best-solution record and the bandit's statistics carry
//! information across rounds.
//!
//! # Key Types
//!
//! - [`EnvConfig`]: Round count, population-size bounds, engine and
//!   bandit sub-configurations, seed
//! - [`EpisodeRunner`]: Executes one full episode
//! - [`EpisodeResult`]: Best solution plus both log sequences
//! - [`RoundLog`]: Loop-scoped per-round log entry

mod config;
mod runner;
mod types;

pub use config::EnvConfig;
pub use runner::{EpisodeResult, EpisodeRunner};
pub use types::RoundLog;
