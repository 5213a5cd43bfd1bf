//! Simulation observer trait for progress reporting and per-tick inspection.

use board_core::Tick;

use crate::Simulation;

/// Callbacks invoked by [`Simulation::run_with`] at key points of a run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, tick: Tick, sim: &Simulation) {
///         if tick.0 % 100 == 0 {
///             println!("{tick}: {}/{} seated", sim.seated_count(), sim.passenger_count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the reset that starts every run, before the first tick.
    fn on_reset(&mut self, _sim: &Simulation) {}

    /// Called after every tick has been stepped, before the clock advances.
    fn on_tick_end(&mut self, _tick: Tick, _sim: &Simulation) {}

    /// Called once when every passenger is seated.
    fn on_run_end(&mut self, _total: Tick, _sim: &Simulation) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Dumps the cabin and the active vacates at `trace` level after every tick.
///
/// Enable with `RUST_LOG=board_sim=trace`.
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_tick_end(&mut self, tick: Tick, sim: &Simulation) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        let mut dump = format!("*** step {}\n{}", tick.0, sim.cabin());
        for (row, entry) in sim.vacating().iter() {
            let queue: Vec<String> = entry.queue.iter().map(|id| id.to_string()).collect();
            dump.push_str(&format!(
                "row {row} vacating: [{}] next at {}\n",
                queue.join(", "),
                entry.next_action
            ));
        }
        log::trace!("{dump}");
    }

    fn on_run_end(&mut self, total: Tick, sim: &Simulation) {
        log::trace!("{} passengers seated after {} ticks", sim.passenger_count(), total.0);
    }
}
