//! Top-level run configuration.

use board_core::{AircraftConfig, BoardingError, BoardingResult, PassengerLoad, Speeds};
use board_zones::BoardingPolicy;

/// Everything needed to (re)build a run, apart from the RNG state.
///
/// Typically assembled by [`SimBuilder`][crate::SimBuilder] or loaded from a
/// JSON experiment file by the driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub aircraft:      AircraftConfig,
    pub speeds:        Speeds,
    pub load:          PassengerLoad,
    pub policy:        BoardingPolicy,
    /// Probability that a passenger carries a bag to stow.  Default: 1.0.
    pub baggage_share: f64,
    /// Master RNG seed.  `None` seeds from OS entropy.
    pub seed:          Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            aircraft:      AircraftConfig::default(),
            speeds:        Speeds::default(),
            load:          PassengerLoad::default(),
            policy:        BoardingPolicy::default(),
            baggage_share: 1.0,
            seed:          None,
        }
    }
}

impl SimConfig {
    /// Validate every field and return the resolved passenger count.
    pub fn validate(&self) -> BoardingResult<usize> {
        self.aircraft.validate()?;
        self.speeds.validate()?;
        if !(0.0..=1.0).contains(&self.baggage_share) {
            return Err(BoardingError::Config(format!(
                "baggage share must be within [0, 1], got {}",
                self.baggage_share
            )));
        }
        self.load.resolve(&self.aircraft)
    }
}
