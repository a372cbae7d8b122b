//! One-generation-at-a-time evolutionary engine.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::types::{Chromosome, GenerationStats};
use crate::knapsack::KnapsackProblem;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Evolutionary engine over binary knapsack solutions.
///
/// Holds the problem instance, the current population, a mutable
/// mutation rate, and the repopulate threshold. One call to
/// [`run_generation`](Self::run_generation) advances the population by
/// exactly one generation; the driving loop (see [`crate::env`]) decides
/// how many generations to run and adjusts the mutation rate and
/// population size between calls.
///
/// Fitness is recomputed on demand via the problem's evaluator and never
/// cached.
pub struct GaEngine<'a> {
    problem: &'a KnapsackProblem,
    population: Vec<Chromosome>,
    population_size: usize,
    mutation_rate: f64,
    repopulate_threshold: f64,
    logs: Vec<GenerationStats>,
}

impl<'a> GaEngine<'a> {
    /// Creates an engine with a fresh random population.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn new<R: Rng>(problem: &'a KnapsackProblem, config: &GaConfig, rng: &mut R) -> Self {
        config.validate().expect("invalid GaConfig");

        let mut engine = Self {
            problem,
            population: Vec::new(),
            population_size: config.population_size,
            mutation_rate: config.mutation_rate,
            repopulate_threshold: config.repopulate_threshold,
            logs: Vec::new(),
        };
        engine.population = engine.random_population(engine.population_size, rng);
        engine
    }

    /// The current population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// The configured (logical) population size.
    ///
    /// The actual population length is one less after a generation when
    /// this is odd, since offspring are produced in pairs.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Sets the configured population size.
    ///
    /// Takes effect at the next [`reset_population`](Self::reset_population)
    /// or [`run_generation`](Self::run_generation).
    ///
    /// # Panics
    /// Panics if `size < 2`.
    pub fn set_population_size(&mut self, size: usize) {
        assert!(size >= 2, "population size must be at least 2");
        self.population_size = size;
    }

    /// The current per-bit mutation rate.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Sets the per-bit mutation rate, clamped to [0, 1].
    pub fn set_mutation_rate(&mut self, rate: f64) {
        self.mutation_rate = rate.clamp(0.0, 1.0);
    }

    /// Fitness of a solution, delegated to the problem's evaluator.
    pub fn fitness(&self, solution: &[bool]) -> f64 {
        self.problem.evaluate(solution)
    }

    /// Fraction of distinct individuals in the population, in (0, 1].
    ///
    /// Equals 1 iff all individuals are pairwise distinct.
    pub fn diversity(&self) -> f64 {
        let unique: HashSet<&Chromosome> = self.population.iter().collect();
        unique.len() as f64 / self.population.len() as f64
    }

    /// Replaces the population with a fresh random one of the configured
    /// size, discarding the current individuals.
    pub fn reset_population<R: Rng>(&mut self, rng: &mut R) {
        self.population = self.random_population(self.population_size, rng);
    }

    /// Partial repopulation: replaces 30% of the population (rounded
    /// down) with fresh random individuals and keeps a uniform random
    /// sample, without replacement, of the remainder.
    pub fn repopulate<R: Rng>(&mut self, rng: &mut R) {
        let replacements = (self.population_size as f64 * 0.3) as usize;
        let kept = self.population.len().saturating_sub(replacements);

        let mut next: Vec<Chromosome> = self
            .population
            .choose_multiple(rng, kept)
            .cloned()
            .collect();
        next.extend(self.random_population(replacements, rng));
        self.population = next;
    }

    /// Selects two parent indices with replacement, weighted by
    /// fitness-proportionate probability.
    ///
    /// When the total population fitness is exactly zero (every
    /// individual infeasible or empty), the weighted probabilities are
    /// undefined and selection falls back to uniform sampling.
    pub fn select_parents<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let fitnesses: Vec<f64> = self
            .population
            .iter()
            .map(|ind| self.fitness(ind))
            .collect();
        let total: f64 = fitnesses.iter().sum();

        if total == 0.0 {
            let n = self.population.len();
            return (rng.random_range(0..n), rng.random_range(0..n));
        }

        (
            weighted_pick(&fitnesses, total, rng),
            weighted_pick(&fitnesses, total, rng),
        )
    }

    /// Advances the population by one generation.
    ///
    /// 1. Repopulates if diversity is below the threshold.
    /// 2. Builds a new population: `population_size / 2` rounds of
    ///    select two parents → cross them both ways → mutate each child →
    ///    append both. An odd configured size silently yields one
    ///    individual fewer than configured.
    /// 3. Replaces the population and records a [`GenerationStats`] entry.
    pub fn run_generation<R: Rng>(&mut self, generation: usize, rng: &mut R) {
        if self.diversity() < self.repopulate_threshold {
            self.repopulate(rng);
        }

        let pairs = self.population_size / 2;
        let mut next = Vec::with_capacity(pairs * 2);
        for _ in 0..pairs {
            let (a, b) = self.select_parents(rng);
            let mut child1 = single_point_crossover(&self.population[a], &self.population[b], rng);
            let mut child2 = single_point_crossover(&self.population[b], &self.population[a], rng);
            bit_flip_mutation(&mut child1, self.mutation_rate, rng);
            bit_flip_mutation(&mut child2, self.mutation_rate, rng);
            next.push(child1);
            next.push(child2);
        }
        self.population = next;

        let fitnesses: Vec<f64> = self
            .population
            .iter()
            .map(|ind| self.fitness(ind))
            .collect();
        let best_fitness = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let avg_fitness = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;

        self.logs.push(GenerationStats {
            generation,
            best_fitness,
            avg_fitness,
            mutation_rate: self.mutation_rate,
            population_size: self.population.len(),
        });
    }

    /// The accumulated per-generation statistics, in generation order.
    pub fn logs(&self) -> &[GenerationStats] {
        &self.logs
    }

    fn random_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        (0..self.problem.len()).map(|_| rng.random_bool(0.5)).collect()
    }

    fn random_population<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<Chromosome> {
        (0..size).map(|_| self.random_individual(rng)).collect()
    }
}

/// Roulette-wheel pick over non-negative weights with a known total.
fn weighted_pick<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len() - 1 // floating-point fallback
}
