//! RNG module - seeded color sampling and shuffling
//!
//! Board generation needs two random operations: pick N distinct colors from a
//! palette, then shuffle the doubled list. Both go through [`GameRng`], which
//! wraps ChaCha8 so the same seed always deals the same board (handy for tests
//! and for replaying a round with `MEMORY_SEED`).

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for dealing boards
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The seed is still recorded so the round can be reproduced.
    pub fn random() -> Self {
        Self::new(rand::random::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick `count` distinct entries uniformly without replacement.
    ///
    /// Returns `None` when the pool is smaller than `count`.
    pub fn sample_distinct<T: Copy>(&mut self, pool: &[T], count: usize) -> Option<Vec<T>> {
        if count > pool.len() {
            return None;
        }
        Some(
            pool.choose_multiple(&mut self.inner, count)
                .copied()
                .collect(),
        )
    }

    /// Shuffle a slice in place (uniform)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
