//! Seeded random number generation.
//!
//! All randomness in a run is drawn from a single [`StdRng`] stream, so a
//! run is fully reproducible given one seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded RNG for reproducible runs.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
