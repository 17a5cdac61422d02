//! Deterministic random number generation.
//!
//! Every source of randomness in a game (deck shuffles, strategy coin
//! flips, color tie-breaks, the random player count) is drawn from a
//! `GameRng` derived from the single seed given to the game builder.
//!
//! ## Streams
//!
//! ```
//! use duo_cards::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//!
//! // Player decisions get a stream of their own
//! let mut decisions = root.for_context("decisions");
//!
//! // Every new deck gets a fresh stream
//! let mut deck_rng = root.fork();
//!
//! let mut again = GameRng::new(42).for_context("decisions");
//! assert_eq!(decisions.gen_range(2..=4), again.gen_range(2..=4));
//! # let _ = deck_rng.coin_flip();
//! ```

use rand::distributions::uniform::SampleRange;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 stream with forking and named sub-streams.
///
/// Cloning a `GameRng` clones its position, so a cloned deck shuffles
/// exactly like the original would have.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Split off a new stream. Successive forks differ from each other
    /// and from the parent; the game forks once per fresh deck.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(
            self.seed
                .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15)),
        )
    }

    /// Stream named by `context`. Depends only on the seed, not on how much
    /// of this stream has been consumed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform draw from `range` (half-open or inclusive).
    pub fn gen_range(&mut self, range: impl SampleRange<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick from `slice`, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
