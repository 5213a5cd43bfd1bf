//! The cabin grid: two seat blocks, the aisle, and the overhead bins.
//!
//! Cells hold `Option<PassengerId>`.  Every mutation that would put two
//! passengers in one cell panics: no legitimate transition produces that,
//! so it is a logic bug, not a runtime condition.

use std::fmt;

use board_core::{AircraftConfig, PassengerId, SeatCoord, Side};

#[derive(Clone, Debug)]
pub struct Cabin {
    aircraft: AircraftConfig,
    left:     Vec<Option<PassengerId>>,
    right:    Vec<Option<PassengerId>>,
    aisle:    Vec<Option<PassengerId>>,
    /// Bags stowed per row, indexed by `Side::code()`.  No capacity limit.
    bins:     Vec<[u32; 2]>,
}

impl Cabin {
    pub fn new(aircraft: AircraftConfig) -> Self {
        let rows = aircraft.total_rows();
        Self {
            aircraft,
            left:  vec![None; rows * aircraft.seats_left],
            right: vec![None; rows * aircraft.seats_right],
            aisle: vec![None; rows],
            bins:  vec![[0; 2]; rows],
        }
    }

    pub fn aircraft(&self) -> &AircraftConfig {
        &self.aircraft
    }

    // ── Seats ─────────────────────────────────────────────────────────────

    /// Occupant of `seat`, if any.
    pub fn seat(&self, seat: SeatCoord) -> Option<PassengerId> {
        self.block(seat.side())[self.seat_index(seat.row, seat.side(), seat.column())]
    }

    /// Mark `seat` as taken by `id`.
    ///
    /// A passenger returning to a seat it still holds (after vacating) is
    /// allowed; anyone else already in the cell is an invariant violation.
    pub fn occupy_seat(&mut self, seat: SeatCoord, id: PassengerId) {
        let i = self.seat_index(seat.row, seat.side(), seat.column());
        let cell = &mut self.block_mut(seat.side())[i];
        assert!(
            cell.is_none_or(|current| current == id),
            "{id} cannot sit at {seat}: already taken by {}",
            cell.map_or(0, PassengerId::get),
        );
        *cell = Some(id);
    }

    /// `true` if `seat` and every seat between it and the aisle are free.
    pub fn is_seat_accessible(&self, seat: SeatCoord) -> bool {
        (0..=seat.column()).all(|c| self.column(seat.row, seat.side(), c).is_none())
    }

    /// Seated passengers between the aisle and `seat` (exclusive), aisle first.
    pub fn occupants_between(&self, seat: SeatCoord) -> Vec<PassengerId> {
        (0..seat.column())
            .filter_map(|c| self.column(seat.row, seat.side(), c))
            .collect()
    }

    /// Occupants of one block of `row`, aisle to window.
    pub fn seat_row(&self, row: usize, side: Side) -> &[Option<PassengerId>] {
        let w = self.width(side);
        &self.block(side)[row * w..(row + 1) * w]
    }

    // ── Aisle ─────────────────────────────────────────────────────────────

    pub fn aisle(&self, row: usize) -> Option<PassengerId> {
        self.aisle[row]
    }

    #[inline]
    pub fn is_aisle_free(&self, row: usize) -> bool {
        self.aisle[row].is_none()
    }

    /// Put `id` in the aisle cell of `row`.
    pub fn enter_aisle(&mut self, row: usize, id: PassengerId) {
        assert!(
            self.aisle[row].is_none(),
            "{id} cannot enter aisle row {row}: occupied by {}",
            self.aisle[row].map_or(0, PassengerId::get),
        );
        self.aisle[row] = Some(id);
    }

    /// Move `id` from aisle row `from` to `from + 1`.
    pub fn advance_in_aisle(&mut self, from: usize, id: PassengerId) {
        assert_eq!(self.aisle[from], Some(id), "{id} is not in aisle row {from}");
        self.aisle[from] = None;
        self.enter_aisle(from + 1, id);
    }

    /// Empty the aisle cell of `row`, returning whoever stood there.
    pub fn clear_aisle(&mut self, row: usize) -> Option<PassengerId> {
        self.aisle[row].take()
    }

    /// Empty the aisle cell of `row` only if `id` stands there.
    pub fn clear_aisle_if(&mut self, row: usize, id: PassengerId) -> bool {
        if self.aisle[row] == Some(id) {
            self.aisle[row] = None;
            true
        } else {
            false
        }
    }

    // ── Bins ──────────────────────────────────────────────────────────────

    pub fn stow_bag(&mut self, row: usize, side: Side) {
        self.bins[row][side.code() as usize] += 1;
    }

    pub fn bags(&self, row: usize, side: Side) -> u32 {
        self.bins[row][side.code() as usize]
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn column(&self, row: usize, side: Side, column: usize) -> Option<PassengerId> {
        self.block(side)[self.seat_index(row, side, column)]
    }

    fn width(&self, side: Side) -> usize {
        match side {
            Side::Left => self.aircraft.seats_left,
            Side::Right => self.aircraft.seats_right,
        }
    }

    fn seat_index(&self, row: usize, side: Side, column: usize) -> usize {
        let w = self.width(side);
        assert!(column < w, "column {column} outside the {side:?} block of width {w}");
        row * w + column
    }

    fn block(&self, side: Side) -> &[Option<PassengerId>] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn block_mut(&mut self, side: Side) -> &mut [Option<PassengerId>] {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl fmt::Display for Cabin {
    /// One line per row:
    /// `left seats (window→aisle) | [bags] aisle [bags] | right seats`.
    /// Empty cells print as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = |c: &Option<PassengerId>| c.map_or(0, PassengerId::get).to_string();
        for row in 0..self.aircraft.total_rows() {
            let left: Vec<String> = self.seat_row(row, Side::Left).iter().rev().map(id).collect();
            let right: Vec<String> = self.seat_row(row, Side::Right).iter().map(id).collect();
            writeln!(
                f,
                "{} | [{}] {} [{}] | {}",
                left.join(" "),
                self.bags(row, Side::Left),
                id(&self.aisle[row]),
                self.bags(row, Side::Right),
                right.join(" "),
            )?;
        }
        Ok(())
    }
}
