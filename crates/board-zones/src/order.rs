//! Per-seat boarding-order grids, kept for debugging and visualization only.

use std::fmt;

use board_core::{AircraftConfig, SeatCoord, Side};

use crate::ZoneScore;

/// The zone score of every assigned seat, laid out like the cabin.
///
/// Both blocks are stored row-major with column 0 next to the aisle.  Seats
/// nobody was assigned to hold `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardingOrder {
    aircraft: AircraftConfig,
    left:     Vec<Option<ZoneScore>>,
    right:    Vec<Option<ZoneScore>>,
}

impl BoardingOrder {
    /// An empty grid for `aircraft`.
    pub fn new(aircraft: AircraftConfig) -> Self {
        let rows = aircraft.total_rows();
        Self {
            aircraft,
            left:  vec![None; rows * aircraft.seats_left],
            right: vec![None; rows * aircraft.seats_right],
        }
    }

    pub fn aircraft(&self) -> &AircraftConfig {
        &self.aircraft
    }

    /// Store `score` for `seat`.
    ///
    /// # Panics
    /// Panics if `seat` is not a seat of this cabin.
    pub fn record(&mut self, seat: SeatCoord, score: ZoneScore) {
        let i = self.cell(seat);
        match seat.side() {
            Side::Left => self.left[i] = Some(score),
            Side::Right => self.right[i] = Some(score),
        }
    }

    pub fn get(&self, seat: SeatCoord) -> Option<ZoneScore> {
        if !self.aircraft.contains(seat) {
            return None;
        }
        let i = self.cell(seat);
        match seat.side() {
            Side::Left => self.left[i],
            Side::Right => self.right[i],
        }
    }

    /// Left block of `row`, aisle to window.
    pub fn left_row(&self, row: usize) -> &[Option<ZoneScore>] {
        let w = self.aircraft.seats_left;
        &self.left[row * w..(row + 1) * w]
    }

    /// Right block of `row`, aisle to window.
    pub fn right_row(&self, row: usize) -> &[Option<ZoneScore>] {
        let w = self.aircraft.seats_right;
        &self.right[row * w..(row + 1) * w]
    }

    fn cell(&self, seat: SeatCoord) -> usize {
        assert!(self.aircraft.contains(seat), "seat {seat} is outside the cabin");
        let width = match seat.side() {
            Side::Left => self.aircraft.seats_left,
            Side::Right => self.aircraft.seats_right,
        };
        seat.row * width + seat.column()
    }
}

impl fmt::Display for BoardingOrder {
    /// One real row per line: left block window→aisle, a gap, right block
    /// aisle→window.  Unassigned seats print as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |s: &Option<ZoneScore>| s.map_or_else(|| ".".to_string(), |v| v.to_string());
        for row in self.aircraft.real_rows() {
            let left: Vec<String> = self.left_row(row).iter().rev().map(cell).collect();
            let right: Vec<String> = self.right_row(row).iter().map(cell).collect();
            writeln!(f, "{} | {}", left.join(" "), right.join(" "))?;
        }
        Ok(())
    }
}
