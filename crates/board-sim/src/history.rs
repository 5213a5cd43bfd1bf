//! Append-only run log consumed by the replay tool.
//!
//! The simulation only ever writes to the history; nothing in the stepper
//! reads it back.

use board_core::{PassengerId, Side, Tick};

use crate::PassengerState;

/// One position/state sample of a passenger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub tick:  Tick,
    pub x:     i32,
    pub y:     usize,
    pub state: PassengerState,
}

/// A bag put into an overhead bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaggageEvent {
    pub tick: Tick,
    pub row:  usize,
    pub side: Side,
}

/// Per-passenger tracks plus the global baggage log of one run.
#[derive(Clone, Debug, Default)]
pub struct History {
    /// Indexed by passenger slot; empty until the first record.
    tracks:     Vec<Vec<HistoryEntry>>,
    /// Passengers in order of their first record.
    first_seen: Vec<PassengerId>,
    baggage:    Vec<BaggageEvent>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: PassengerId, tick: Tick, x: i32, y: usize, state: PassengerState) {
        let slot = id.slot();
        if slot >= self.tracks.len() {
            self.tracks.resize_with(slot + 1, Vec::new);
        }
        let track = &mut self.tracks[slot];
        if track.is_empty() {
            self.first_seen.push(id);
        }
        track.push(HistoryEntry { tick, x, y, state });
    }

    pub fn record_baggage(&mut self, tick: Tick, row: usize, side: Side) {
        self.baggage.push(BaggageEvent { tick, row, side });
    }

    /// Entries of one passenger, oldest first.
    pub fn track(&self, id: PassengerId) -> &[HistoryEntry] {
        self.tracks.get(id.slot()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every non-empty track, in order of first appearance.
    pub fn tracks(&self) -> impl Iterator<Item = (PassengerId, &[HistoryEntry])> + '_ {
        self.first_seen.iter().map(|&id| (id, self.track(id)))
    }

    /// Number of passengers with at least one entry.
    pub fn passengers_seen(&self) -> usize {
        self.first_seen.len()
    }

    pub fn baggage(&self) -> &[BaggageEvent] {
        &self.baggage
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty() && self.baggage.is_empty()
    }
}
