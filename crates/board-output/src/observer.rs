//! `HistoryFileObserver`: writes one history file per completed run.

use std::path::{Path, PathBuf};

use board_core::Tick;
use board_sim::{SimObserver, Simulation};
use board_zones::BoardingPolicy;

use crate::history_file::write_history;
use crate::naming::history_file_name;
use crate::OutputError;

/// A [`SimObserver`] that dumps the history of every finished run into
/// `dir`, named by [`history_file_name`] with a running index.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_with()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct HistoryFileObserver {
    dir:        PathBuf,
    policy:     BoardingPolicy,
    proportion: f64,
    next_run:   usize,
    written:    Vec<PathBuf>,
    last_error: Option<OutputError>,
}

impl HistoryFileObserver {
    /// `proportion` only labels the file names.
    pub fn new(dir: &Path, policy: BoardingPolicy, proportion: f64) -> Self {
        Self {
            dir: dir.to_path_buf(),
            policy,
            proportion,
            next_run: 0,
            written: Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Paths written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SimObserver for HistoryFileObserver {
    fn on_run_end(&mut self, total: Tick, sim: &Simulation) {
        let aircraft = sim.cabin().aircraft();
        let path = self
            .dir
            .join(history_file_name(self.policy, self.proportion, aircraft, self.next_run));
        self.next_run += 1;

        match write_history(&path, sim) {
            Ok(()) => {
                log::debug!("history of a {}-tick run written to {}", total.0, path.display());
                self.written.push(path);
            }
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
            }
        }
    }
}
