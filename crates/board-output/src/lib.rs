//! `board-output`: result files of the boarding simulator.
//!
//! | Module              | File                                   | Consumer            |
//! |---------------------|----------------------------------------|---------------------|
//! | [`history_file`]    | per-run passenger tracks + baggage log | replay / animation  |
//! | [`order_file`]      | zone score of every seat               | seat-map plots      |
//! | [`timing_file`]     | total boarding times of repeated runs  | statistics          |
//!
//! All three are plain text, one record per line, fields separated by a
//! single space, and are written and read back with the `csv` crate.
//! [`naming`] holds the file-name conventions and [`HistoryFileObserver`]
//! writes history files straight from a running simulation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use board_output::HistoryFileObserver;
//!
//! let mut obs = HistoryFileObserver::new(Path::new("./output"), policy, 1.0);
//! sim.run_with(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     log::error!("history not written: {e}");
//! }
//! ```

pub mod error;
pub mod history_file;
pub mod naming;
pub mod observer;
pub mod order_file;
pub mod timing_file;

mod record;


pub use error::{OutputError, OutputResult};
pub use history_file::{HistoryFile, read_history, read_history_from, write_history, write_history_to};
pub use naming::{boarding_order_file_name, format_proportion, history_file_name, timing_file_name};
pub use observer::HistoryFileObserver;
pub use order_file::{OrderRow, read_boarding_order, read_boarding_order_from, write_boarding_order, write_boarding_order_to};
pub use timing_file::{TimingFile, read_timing, read_timing_from, write_timing, write_timing_to};
