//! Row-vacating coordinator.
//!
//! When a passenger reaches its row but seated neighbours sit between the
//! aisle and its seat, those neighbours step out, the newcomer gets in, and
//! the neighbours sit back down.  The interaction spans several passengers,
//! so it is tracked here, per row, rather than inside any one passenger.
//!
//! The coordinator only stores passenger ids.  It never touches passengers
//! or the cabin directly: [`VacateCoordinator::resolve`] returns
//! [`VacateAction`]s that the stepper applies in order.
//!
//! # Release order
//!
//! The queue is built aisle-first with the newcomer appended last, and
//! released from the back.  The newcomer is therefore released first, then
//! the neighbours from the window side inwards, one every `seating_ticks`.

use std::collections::BTreeMap;

use board_core::{PassengerId, Tick};

/// An in-progress vacate of one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowVacate {
    /// Passengers still to be released: neighbours aisle-first, newcomer last.
    pub queue:       Vec<PassengerId>,
    /// Tick of the next release (or of the row clearing once `queue` is empty).
    pub next_action: Tick,
}

/// Something the stepper must do on behalf of the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VacateAction {
    /// `passenger` may now (re-)seat itself in `row`.
    Release { row: usize, passenger: PassengerId },
    /// The vacate of `row` is over; free its aisle cell.
    ClearAisle { row: usize },
}

/// All rows currently being vacated, keyed by row.
#[derive(Clone, Debug, Default)]
pub struct VacateCoordinator {
    rows: BTreeMap<usize, RowVacate>,
}

impl VacateCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_vacating(&self, row: usize) -> bool {
        self.rows.contains_key(&row)
    }

    pub fn get(&self, row: usize) -> Option<&RowVacate> {
        self.rows.get(&row)
    }

    /// Active vacates in row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RowVacate)> + '_ {
        self.rows.iter().map(|(&row, entry)| (row, entry))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Start vacating `row`.
    ///
    /// # Panics
    /// Panics if `row` is already being vacated: its aisle cell is held by the
    /// first newcomer until the vacate ends, so a second one cannot arrive.
    pub fn open(&mut self, row: usize, queue: Vec<PassengerId>, next_action: Tick) {
        let previous = self.rows.insert(row, RowVacate { queue, next_action });
        assert!(previous.is_none(), "row {row} is already being vacated");
    }

    /// Advance every vacate that is due at `now`.
    ///
    /// A due row with passengers left releases the last one and schedules the
    /// next release `seating_ticks` later; a due row with an empty queue is
    /// closed and its aisle cell freed.
    pub fn resolve(&mut self, now: Tick, seating_ticks: u64) -> Vec<VacateAction> {
        let mut actions = Vec::new();
        let mut finished = Vec::new();

        for (&row, entry) in self.rows.iter_mut() {
            if entry.next_action > now {
                continue;
            }
            match entry.queue.pop() {
                Some(passenger) => {
                    entry.next_action = now + seating_ticks;
                    actions.push(VacateAction::Release { row, passenger });
                }
                None => finished.push(row),
            }
        }

        for row in finished {
            self.rows.remove(&row);
            actions.push(VacateAction::ClearAisle { row });
        }
        actions
    }
}
