//! `board-core`: foundational types for the airplane boarding simulator.
//!
//! This crate is a dependency of every other `board-*` crate.  It has no
//! `board-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId` (1-based, never zero)                   |
//! | [`time`]        | `Tick`                                                |
//! | [`seat`]        | `SeatCoord`, `Side`                                   |
//! | [`config`]      | `AircraftConfig`, `Speeds`, `PassengerLoad`           |
//! | [`rng`]         | `SimRng` (seat sampling, baggage draws)               |
//! | [`error`]       | `BoardingError`, `BoardingResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and configuration.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod seat;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AircraftConfig, PassengerLoad, Speeds};
pub use error::{BoardingError, BoardingResult};
pub use ids::PassengerId;
pub use rng::SimRng;
pub use seat::{SeatCoord, Side};
pub use time::Tick;
