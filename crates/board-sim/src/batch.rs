//! Monte-Carlo repetitions of one configuration.
//!
//! Each repetition gets its own [`Simulation`][crate::Simulation] and its own
//! RNG, derived from the batch seed with [`SimRng::child`].  The result for a
//! given seed is the same with or without the `parallel` feature.

use board_core::SimRng;

use crate::{SimBuilder, SimConfig, SimResult};

/// Run `runs` independent boardings of `config` and return their total
/// times, in repetition order.  `config.seed` is ignored in favour of `seed`.
pub fn run_batch(config: &SimConfig, runs: usize, seed: u64) -> SimResult<Vec<u64>> {
    let mut root = SimRng::new(seed);
    let rngs: Vec<SimRng> = (0..runs as u64).map(|i| root.child(i)).collect();

    #[cfg(not(feature = "parallel"))]
    {
        rngs.into_iter().map(|rng| run_one(config, rng)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        rngs.into_par_iter().map(|rng| run_one(config, rng)).collect()
    }
}

fn run_one(config: &SimConfig, rng: SimRng) -> SimResult<u64> {
    let mut sim = SimBuilder::from_config(config.clone()).rng(rng).build()?;
    Ok(sim.run()?.0)
}

/// Summary statistics over a batch of boarding times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchSummary {
    pub runs: usize,
    pub mean: f64,
    pub min:  u64,
    pub max:  u64,
}

impl BatchSummary {
    /// `None` for an empty batch.
    pub fn from_times(times: &[u64]) -> Option<Self> {
        let min = *times.iter().min()?;
        let max = *times.iter().max()?;
        let mean = times.iter().sum::<u64>() as f64 / times.len() as f64;
        Some(Self { runs: times.len(), mean, min, max })
    }
}
