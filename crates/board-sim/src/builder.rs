//! Fluent builder for constructing a [`Simulation`].

use std::collections::HashSet;

use board_core::{AircraftConfig, PassengerLoad, SimRng, Speeds};
use board_zones::{Boarding, BoardingPolicy};

use crate::{SimConfig, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// | Method               | Default                                    |
/// |----------------------|--------------------------------------------|
/// | `.speeds(s)`         | move 2, seating 3, stow 3 ticks            |
/// | `.load(l)`           | `PassengerLoad::Proportion(1.0)`           |
/// | `.policy(p)`         | `BoardingPolicy::Random`                   |
/// | `.baggage_share(f)`  | `1.0` (everyone carries a bag)             |
/// | `.seed(s)`           | OS entropy                                 |
/// | `.rng(r)`            | seeded from `.seed`                        |
/// | `.manifest(v)`       | queue re-sampled by zone assignment        |
///
/// All validation happens in [`build`](Self::build), before any grid exists.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(AircraftConfig::new(16, 3, 3))
///     .policy(BoardingPolicy::Steffen)
///     .load(PassengerLoad::Proportion(0.8))
///     .seed(42)
///     .build()?;
/// let total = sim.run()?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    manifest: Option<Vec<Boarding>>,
    rng:      Option<SimRng>,
}

impl SimBuilder {
    /// Start from the default configuration with the given cabin.
    pub fn new(aircraft: AircraftConfig) -> Self {
        Self::from_config(SimConfig { aircraft, ..SimConfig::default() })
    }

    pub fn from_config(config: SimConfig) -> Self {
        Self { config, manifest: None, rng: None }
    }

    pub fn speeds(mut self, speeds: Speeds) -> Self {
        self.config.speeds = speeds;
        self
    }

    pub fn load(mut self, load: PassengerLoad) -> Self {
        self.config.load = load;
        self
    }

    /// Shorthand for `.load(PassengerLoad::Count(n))`.
    pub fn passengers(self, n: usize) -> Self {
        self.load(PassengerLoad::Count(n))
    }

    pub fn policy(mut self, policy: BoardingPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn baggage_share(mut self, share: f64) -> Self {
        self.config.baggage_share = share;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use an already-seeded RNG instead of `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Board exactly these passengers, in this order, on every run.
    ///
    /// Replaces zone assignment; the load and policy settings are then only
    /// used for validation and labelling.
    pub fn manifest(mut self, manifest: Vec<Boarding>) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Validate inputs, perform the first reset, and return a ready-to-run
    /// [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let mut passenger_count = self.config.validate()?;

        if let Some(manifest) = &self.manifest {
            validate_manifest(&self.config.aircraft, manifest)?;
            passenger_count = manifest.len();
        }

        let rng = self.rng.unwrap_or_else(|| match self.config.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        });

        Simulation::new(self.config, passenger_count, self.manifest, rng)
    }
}

/// Every seat must exist and be boarded by at most one passenger.
fn validate_manifest(aircraft: &AircraftConfig, manifest: &[Boarding]) -> SimResult<()> {
    let mut taken = HashSet::with_capacity(manifest.len());
    for (i, b) in manifest.iter().enumerate() {
        if !aircraft.contains(b.seat) {
            return Err(SimError::Manifest(format!("entry {i}: seat {} is not in the cabin", b.seat)));
        }
        if !taken.insert(b.seat) {
            return Err(SimError::Manifest(format!("entry {i}: seat {} is assigned twice", b.seat)));
        }
    }
    Ok(())
}
