//! List reshaping.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Concatenate sublists into one list, one level deep.
pub fn flatten<T: Clone>(lists: &[Vec<T>]) -> Vec<T> {
    lists.iter().flatten().cloned().collect()
}

/// Return a shuffled copy of `values`.
///
/// With a seed the order is reproducible across runs and platforms. Without
/// one the generator is seeded from OS entropy.
pub fn shuffle<T: Clone>(values: &[T], seed: Option<u64>) -> Vec<T> {
    let mut rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    let mut result = values.to_vec();
    result.shuffle(&mut rng);
    result
}
