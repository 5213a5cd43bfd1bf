//! `board-sim`: the boarding simulation engine.
//!
//! # Tick loop
//!
//! ```text
//! reset: zone assignment builds the queue; cabin, vacates, history cleared
//! for tick in 0..:
//!   ① Vacates     every due row-vacate releases one passenger to seat,
//!                 or closes and frees its aisle cell.
//!   ② Check       everyone seated?  then this tick is the boarding time.
//!   ③ Passengers  each boarded passenger whose next action is due runs
//!                 one state-machine transition, in queue order.
//!   ④ Queue       the queue head enters aisle row 0 if it is free.
//! ```
//!
//! # Passenger states
//!
//! ```text
//! Queued → AisleWait ⇄ Moving → [StowingBaggage] → Seating → Seated
//!                                               ↘ WaitToSeat ↗
//! Seated → Vacating → Seating → Seated            (pushed by the coordinator)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs [`batch::run_batch`] repetitions on Rayon's pool.  |
//! | `serde`    | `Serialize`/`Deserialize` on [`SimConfig`].             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use board_core::AircraftConfig;
//! use board_sim::SimBuilder;
//! use board_zones::BoardingPolicy;
//!
//! let mut sim = SimBuilder::new(AircraftConfig::new(16, 3, 3))
//!     .policy(BoardingPolicy::BackToFront3Zones)
//!     .seed(42)
//!     .build()?;
//! let total = sim.run()?;
//! ```

pub mod batch;
pub mod builder;
pub mod cabin;
pub mod config;
pub mod error;
pub mod history;
pub mod observer;
pub mod passenger;
pub mod sim;
pub mod vacate;


pub use batch::{BatchSummary, run_batch};
pub use builder::SimBuilder;
pub use cabin::Cabin;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use history::{BaggageEvent, History, HistoryEntry};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use passenger::{Passenger, PassengerState};
pub use sim::Simulation;
pub use vacate::{RowVacate, VacateAction, VacateCoordinator};
