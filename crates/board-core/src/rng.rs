//! Deterministic simulation RNG.
//!
//! One `SimRng` per `Simulation`.  It is consumed only by zone assignment
//! (seat sampling and baggage draws), so two simulations built from the same
//! seed produce identical boarding queues regardless of what the stepper does.
//!
//! Monte-Carlo batches derive one child per repetition with
//! [`SimRng::child`], so repetitions never share RNG state and can run on
//! separate threads.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy; runs are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` with a different seed offset.  Used to seed one
    /// RNG per Monte-Carlo repetition from the batch seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// A fresh seed from OS entropy, for callers that log the seed so the
    /// run can be replayed.
    pub fn entropy_seed() -> u64 {
        SmallRng::from_entropy().r#gen()
    }

    /// Draw `amount` distinct indices from `0..len`, in draw order.
    ///
    /// # Panics
    /// Panics if `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount).into_vec()
    }

    /// `true` with probability `p` (clamped to [0, 1]).  Does not consume
    /// randomness when `p` is 0 or 1.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p >= 1.0 {
            true
        } else if p <= 0.0 {
            false
        } else {
            self.0.gen_bool(p)
        }
    }
}
