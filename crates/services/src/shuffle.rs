use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use memtest_core::model::{Shuffle, Symbol};

/// Uniform Fisher–Yates shuffler backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    /// Seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence of permutations for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, otherwise from the operating system.
    #[must_use]
    pub fn from_seed_or_os(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl Shuffle for RandomShuffler {
    fn shuffle(&mut self, symbols: &mut [Symbol]) {
        symbols.shuffle(&mut self.rng);
    }
}
