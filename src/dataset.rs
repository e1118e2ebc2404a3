//! Deterministic benchmark inputs.
//!
//! Fixed-seed generation so every benchmark run (and every machine)
//! measures the algorithms over identical data.

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// The values `0..len`, shuffled by a generator seeded with `seed`.
///
/// Every value occurs exactly once, so searching for `len - 1` is a full
/// scan in expectation and membership of any probe below `len` is certain.
pub fn shuffled_run(len: i32, seed: u64) -> Vec<i32> {
    let mut values: Vec<i32> = (0..len).collect();

    values.shuffle(&mut StdRng::seed_from_u64(seed));

    values
}

/// `len` samples drawn uniformly from `[low, high)`, seeded with `seed`.
pub fn uniform<T>(len: usize, low: T, high: T, seed: u64) -> Vec<T>
where
    T: SampleUniform,
{
    let between = Uniform::new(low, high);
    let mut rng = StdRng::seed_from_u64(seed);

    (0..len).map(|_| between.sample(&mut rng)).collect()
}
