//! Genetic operators for binary chromosomes.
//!
//! Free functions operating on `&[bool]` inclusion vectors, independent
//! of the engine so they can be tested and reused in isolation.
//!
//! # Operators
//!
//! - [`single_point_crossover`]: parent1 prefix + parent2 suffix — O(n)
//! - [`bit_flip_mutation`]: independent per-bit flip — O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use super::types::Chromosome;
use rand::Rng;

/// Single-point crossover for binary chromosomes.
///
/// The cut point is drawn uniformly from `[1, len - 1]`, so the child
/// always carries at least one bit from each parent. The child is
/// parent1's prefix followed by parent2's suffix; swap the argument
/// order (with a fresh random cut) for the complementary child.
///
/// Length-1 parents have an empty cut-point range and return a copy of
/// `parent1` unchanged.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> Chromosome {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let point = rng.random_range(1..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Flips each bit independently with probability `rate`, in place.
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut [bool], rate: f64, rng: &mut R) {
    for bit in chromosome.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *bit = !*bit;
        }
    }
}
