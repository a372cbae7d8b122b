//! Episode execution: the round loop coupling bandit and engine.

use super::config::EnvConfig;
use super::types::RoundLog;
use crate::bandit::{ArmLog, UcbAgent};
use crate::ga::{Chromosome, GaEngine};
use crate::knapsack::KnapsackProblem;
use crate::random::create_rng;

/// Result of one optimization episode.
///
/// Owns both log sequences, so each run's logs are independent of any
/// other run's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeResult {
    /// The best solution found during the entire episode.
    pub best: Chromosome,

    /// Fitness of `best` (total value of the included items).
    pub best_fitness: f64,

    /// Number of rounds executed.
    pub generations: usize,

    /// Loop-scoped log, one entry per round.
    pub logs: Vec<RoundLog>,

    /// Controller-scoped log, one entry per round.
    pub bandit_logs: Vec<ArmLog>,
}

/// Executes the optimization loop.
///
/// # Usage
///
/// ```
/// use bandit_ga::env::{EnvConfig, EpisodeRunner};
/// use bandit_ga::knapsack::KnapsackProblem;
///
/// let problem = KnapsackProblem::example();
/// let config = EnvConfig::default().with_generations(20).with_seed(42);
/// let result = EpisodeRunner::run(&problem, &config);
/// assert!(result.best_fitness > 0.0);
/// ```
pub struct EpisodeRunner;

impl EpisodeRunner {
    /// Runs one full episode of `config.generations` rounds.
    ///
    /// Per round:
    /// 1. The bandit selects a mutation rate; the engine adopts it.
    /// 2. The engine evolves one generation.
    /// 3. The best evolved individual updates the best-solution record on
    ///    strict improvement.
    /// 4. The global-best delta (always ≥ 0) drives the ±5 population
    ///    resize within the configured bounds, and the evolved population
    ///    is discarded for a fresh random one of the adjusted size.
    /// 5. The bandit is rewarded with the generation best minus the prior
    ///    global best (possibly negative), and a [`RoundLog`] entry is
    ///    appended.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`EnvConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(problem: &KnapsackProblem, config: &EnvConfig) -> EpisodeResult {
        config.validate().expect("invalid EnvConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let ga_config = config.ga.clone().with_population_size(config.pop_size_min);
        let mut engine = GaEngine::new(problem, &ga_config, &mut rng);
        let mut agent = UcbAgent::new(&config.bandit);

        // The empty solution is always feasible at fitness 0; the record
        // only moves on strict improvement.
        let mut best: Chromosome = vec![false; problem.len()];
        let mut best_fitness = 0.0_f64;
        let mut logs = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            let action = agent.select_action();
            let rate = agent.action_value(action);
            engine.set_mutation_rate(rate);

            let prev_best = best_fitness;
            engine.run_generation(generation, &mut rng);

            let fitnesses: Vec<f64> = engine
                .population()
                .iter()
                .map(|ind| engine.fitness(ind))
                .collect();
            let (gen_best_index, gen_best) = fitnesses
                .iter()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |acc, (i, &f)| {
                    if f > acc.1 {
                        (i, f)
                    } else {
                        acc
                    }
                });

            if gen_best > best_fitness {
                best_fitness = gen_best;
                best = engine.population()[gen_best_index].clone();
            }

            // Stalled progress grows the population, fast progress shrinks
            // it; either way the evolved population is replaced by a fresh
            // random one of the adjusted size.
            let improvement = best_fitness - prev_best;
            let size = engine.population_size();
            let new_size = if improvement < 0.01 {
                (size + 5).min(config.pop_size_max)
            } else if improvement > 0.05 {
                size.saturating_sub(5).max(config.pop_size_min)
            } else {
                size
            };
            engine.set_population_size(new_size);
            engine.reset_population(&mut rng);

            let reward = gen_best - prev_best;
            agent.update_action_reward(action, reward, generation);

            let avg_fitness = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
            logs.push(RoundLog {
                generation,
                best_fitness,
                avg_fitness,
                mutation_rate: rate,
                population_size: new_size,
                reward,
            });
        }

        EpisodeResult {
            best,
            best_fitness,
            generations: config.generations,
            logs,
            bandit_logs: agent.into_logs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_converges() {
        let problem = KnapsackProblem::from_pairs(&[(5.0, 10.0)], 10.0).unwrap();
        let config = EnvConfig::default().with_generations(10).with_seed(42);

        let result = EpisodeRunner::run(&problem, &config);

        assert_eq!(result.best_fitness, 10.0);
        assert_eq!(result.best, vec![true]);
    }

    #[test]
    fn test_two_items_find_the_heavier_optimum() {
        // {item 0} is optimal at value 10; both together weigh 11 > 10.
        let problem = KnapsackProblem::from_pairs(&[(6.0, 10.0), (5.0, 6.0)], 10.0).unwrap();
        let config = EnvConfig::default().with_generations(20).with_seed(42);

        let result = EpisodeRunner::run(&problem, &config);

        assert_eq!(result.best_fitness, 10.0);
        assert_eq!(result.best, vec![true, false]);
    }

    #[test]
    fn test_zero_capacity_keeps_empty_record() {
        let problem = KnapsackProblem::from_pairs(&[(5.0, 10.0), (3.0, 6.0)], 0.0).unwrap();
        let config = EnvConfig::default().with_generations(10).with_seed(42);

        let result = EpisodeRunner::run(&problem, &config);

        assert_eq!(result.best_fitness, 0.0);
        assert_eq!(result.best, vec![false, false]);
        for entry in &result.logs {
            assert_eq!(entry.best_fitness, 0.0);
        }
    }

    #[test]
    fn test_best_fitness_is_monotone_non_decreasing() {
        let problem = KnapsackProblem::example();
        let config = EnvConfig::default().with_generations(50).with_seed(7);

        let result = EpisodeRunner::run(&problem, &config);

        for window in result.logs.windows(2) {
            assert!(
                window[1].best_fitness >= window[0].best_fitness,
                "best fitness regressed: {} -> {}",
                window[0].best_fitness,
                window[1].best_fitness
            );
        }
        assert_eq!(
            result.logs.last().unwrap().best_fitness,
            result.best_fitness
        );
    }

    #[test]
    fn test_population_size_moves_in_steps_within_bounds() {
        let problem = KnapsackProblem::example();
        let config = EnvConfig::default().with_generations(50).with_seed(7);

        let result = EpisodeRunner::run(&problem, &config);

        let mut prev = config.pop_size_min as i64;
        for entry in &result.logs {
            let size = entry.population_size as i64;
            assert!(size >= config.pop_size_min as i64);
            assert!(size <= config.pop_size_max as i64);
            assert!(
                (size - prev).abs() <= 5,
                "population size jumped by more than 5: {prev} -> {size}"
            );
            prev = size;
        }
    }

    #[test]
    fn test_result_fitness_matches_evaluator() {
        let problem = KnapsackProblem::example();
        let config = EnvConfig::default().with_generations(30).with_seed(3);

        let result = EpisodeRunner::run(&problem, &config);

        assert_eq!(problem.evaluate(&result.best), result.best_fitness);
        assert!(problem.solution_weight(&result.best) <= problem.capacity());
    }

    #[test]
    fn test_log_shapes() {
        let problem = KnapsackProblem::example();
        let config = EnvConfig::default().with_generations(25).with_seed(1);

        let result = EpisodeRunner::run(&problem, &config);

        assert_eq!(result.generations, 25);
        assert_eq!(result.logs.len(), 25);
        assert_eq!(result.bandit_logs.len(), 25);
        for (i, (round, arm)) in result.logs.iter().zip(&result.bandit_logs).enumerate() {
            assert_eq!(round.generation, i);
            assert_eq!(arm.generation, i);
            // The rate the loop applied is the rate the bandit rewarded.
            assert_eq!(round.mutation_rate, arm.action);
            assert_eq!(round.reward, arm.reward);
        }
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let problem = KnapsackProblem::example();
        let config = EnvConfig::default().with_generations(40).with_seed(99);

        let a = EpisodeRunner::run(&problem, &config);
        let b = EpisodeRunner::run(&problem, &config);

        assert_eq!(a, b);
    }

    #[test]
    fn test_example_instance_finds_good_solution() {
        let problem = KnapsackProblem::example();
        let config = EnvConfig::default().with_generations(100).with_seed(42);

        let result = EpisodeRunner::run(&problem, &config);

        // Greedy by value density reaches 185 on this instance. The loop
        // regenerates the population every round, so it converges far more
        // slowly than a classic GA; 100 is a conservative floor over 100
        // rounds of sampling.
        assert!(
            result.best_fitness >= 100.0,
            "expected best fitness >= 100 on the example instance, got {}",
            result.best_fitness
        );
    }

    #[test]
    #[should_panic(expected = "invalid EnvConfig")]
    fn test_run_rejects_invalid_config() {
        let problem = KnapsackProblem::example();
        EpisodeRunner::run(&problem, &EnvConfig::default().with_generations(0));
    }
}
