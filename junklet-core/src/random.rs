//! Randomness for junk generation.
//!
//! Every `rand::Rng` is a [`RandomSource`], so the default thread RNG works
//! as-is. [`SeededSource`] gives reproducible runs: print its seed on failure
//! and replay with `JUNKLET_SEED`.

pub use rand::rngs::ThreadRng;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Environment variable read by [`SeededSource::from_env_or_random`].
pub const SEED_ENV: &str = "JUNKLET_SEED";

/// The draws the generator needs.
pub trait RandomSource {
    /// `len` uniformly distributed lowercase hex digits.
    fn hex(&mut self, len: usize) -> String;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `min..=max`. Requires `min <= max`.
    fn int_between(&mut self, min: i64, max: i64) -> i64;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn hex(&mut self, len: usize) -> String {
        // Two digits per byte; odd lengths drop the final nibble.
        let mut bytes = vec![0u8; len.div_ceil(2)];
        self.fill_bytes(&mut bytes);
        let mut digits = hex::encode(bytes);
        digits.truncate(len);
        digits
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn int_between(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Seeded source for reproducible junk.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
    seed: u64,
}

impl SeededSource {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from `JUNKLET_SEED` or a random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var(SEED_ENV)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random);
        tracing::debug!(seed, "seeded junk source");
        Self::new(seed)
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SeededSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
