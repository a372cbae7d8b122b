//! Bandit-tuned genetic algorithm for the 0/1 knapsack problem.
//!
//! Searches for a high-value subset of items under a weight capacity
//! using a population-based evolutionary search whose
//! exploration/exploitation tradeoff is tuned online by a UCB1
//! multi-armed bandit:
//!
//! - **Knapsack evaluator** ([`knapsack`]): Immutable problem instance;
//!   scores a binary inclusion vector as total value within capacity,
//!   else zero. Infeasible solutions are never repaired.
//! - **Evolutionary engine** ([`ga`]): Population of binary chromosomes;
//!   one generation per call with diversity-triggered repopulation,
//!   fitness-proportionate selection, single-point crossover, and
//!   per-bit mutation at an externally tunable rate.
//! - **Bandit controller** ([`bandit`]): A fixed set of candidate
//!   mutation rates as arms; UCB1 selection with deterministic
//!   tie-breaking, rewarded by per-round fitness improvement.
//! - **Optimization loop** ([`env`]): Drives N rounds coupling the two —
//!   the bandit's choice becomes the round's mutation rate, fitness
//!   improvement becomes the bandit reward, and a fitness-trend
//!   heuristic resizes the population between rounds.
//!
//! Runs are single-threaded and fully sequential; all randomness comes
//! from one seeded stream ([`random`]), so a run is reproducible from
//! its seed.
//!
//! # Example
//!
//! ```
//! use bandit_ga::env::{EnvConfig, EpisodeRunner};
//! use bandit_ga::knapsack::KnapsackProblem;
//!
//! let problem = KnapsackProblem::from_pairs(
//!     &[(5.0, 10.0), (4.0, 40.0), (6.0, 30.0), (3.0, 50.0)],
//!     10.0,
//! )?;
//! let config = EnvConfig::default().with_generations(30).with_seed(42);
//!
//! let result = EpisodeRunner::run(&problem, &config);
//! println!("best value: {}", result.best_fitness);
//! # Ok::<(), String>(())
//! ```

pub mod bandit;
pub mod env;
pub mod ga;
pub mod knapsack;
pub mod random;
