//! Seeded pseudo-random source backing every sampling decision.
//!
//! All higher components draw randomness exclusively through one
//! `Sampler` owned by the workload core. For a fixed seed the stream
//! of draws is stable, so pattern implementations must call the
//! sampler in a fixed, documented order (window offset first, then
//! host indices); reordering or adding calls shifts every subsequent
//! draw and breaks golden outputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic integer sampler.
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Creates a sampler with a known starting state.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Resets the stream to the state produced by `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draws a value uniformly from `[0, bound)`.
    ///
    /// `bound == 0` is a caller contract violation and panics.
    pub fn next_u64(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "sampler bound must be positive; got {bound}");
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Sampler::new(123);
        let mut b = Sampler::new(123);
        for bound in [1u64, 2, 10, 1_000, u64::MAX] {
            assert_eq!(a.next_u64(bound), b.next_u64(bound));
        }
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut s = Sampler::new(7);
        let first: Vec<u64> = (0..16).map(|_| s.next_u64(1000)).collect();
        s.reseed(7);
        let second: Vec<u64> = (0..16).map(|_| s.next_u64(1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_draws_respect_bound() {
        let mut s = Sampler::new(42);
        for _ in 0..1000 {
            assert!(s.next_u64(10) < 10);
        }
    }

    #[test]
    fn test_bound_of_one_is_always_zero() {
        let mut s = Sampler::new(999);
        for _ in 0..100 {
            assert_eq!(s.next_u64(1), 0);
        }
    }

    #[test]
    #[should_panic(expected = "sampler bound must be positive")]
    fn test_zero_bound_panics() {
        Sampler::new(0).next_u64(0);
    }
}
