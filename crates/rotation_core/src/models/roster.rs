//! Demo roster generation (seeded, reproducible).

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Name pool for generated rosters.
pub const NAME_POOL: [&str; 20] = [
    "Alex", "Ben", "Chris", "David", "Emma", "Felix", "George", "Hannah", "Ian", "Jack", "Kate",
    "Leo", "Mike", "Nina", "Oscar", "Peter", "Quinn", "Rose", "Sam", "Tom",
];

/// Draw `count` distinct names from [`NAME_POOL`] (capped at the pool size).
/// The same seed always yields the same roster.
pub fn random_names(count: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pool = NAME_POOL.to_vec();
    pool.shuffle(&mut rng);
    pool.into_iter()
        .take(count)
        .map(str::to_string)
        .collect()
}
