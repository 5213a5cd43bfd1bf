//! Run configuration: cabin shape, action durations, passenger load.
//!
//! Typically built in code or loaded from a JSON experiment file by the
//! driver (`serde` feature) and handed to `board_sim::SimBuilder`.

use std::ops::Range;

use crate::{BoardingError, BoardingResult, SeatCoord};

// ── AircraftConfig ────────────────────────────────────────────────────────────

/// Shape of a single-aisle cabin with two rectangular seat blocks.
///
/// Rows `0..dummy_rows` are buffer rows with no seats; they only give the
/// aisle queue room before the first real row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AircraftConfig {
    /// Number of real (seated) rows.
    pub rows:        usize,
    /// Number of seatless buffer rows in front of the first real row.
    pub dummy_rows:  usize,
    /// Seats per row in the left-hand block.
    pub seats_left:  usize,
    /// Seats per row in the right-hand block.
    pub seats_right: usize,
}

impl Default for AircraftConfig {
    /// 16 rows of 3+3 seats behind 2 buffer rows.
    fn default() -> Self {
        Self { rows: 16, dummy_rows: 2, seats_left: 3, seats_right: 3 }
    }
}

impl AircraftConfig {
    /// A cabin with the default 2 buffer rows.
    pub fn new(rows: usize, seats_left: usize, seats_right: usize) -> Self {
        Self { rows, dummy_rows: 2, seats_left, seats_right }
    }

    pub fn with_dummy_rows(mut self, dummy_rows: usize) -> Self {
        self.dummy_rows = dummy_rows;
        self
    }

    /// Rows in the grid, buffer rows included.
    #[inline]
    pub fn total_rows(&self) -> usize {
        self.rows + self.dummy_rows
    }

    #[inline]
    pub fn seats_per_row(&self) -> usize {
        self.seats_left + self.seats_right
    }

    /// Total number of seats.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rows * self.seats_per_row()
    }

    /// Absolute indices of the rows that carry seats.
    #[inline]
    pub fn real_rows(&self) -> Range<usize> {
        self.dummy_rows..self.total_rows()
    }

    /// Widest seat block; the number of "window-to-aisle" layers per row.
    #[inline]
    pub fn block_width(&self) -> usize {
        self.seats_left.max(self.seats_right)
    }

    /// Signed seat offsets of one row: `-seats_left..=-1`, then `1..=seats_right`.
    pub fn seat_offsets(&self) -> impl Iterator<Item = i32> + '_ {
        (-(self.seats_left as i32)..0).chain(1..=self.seats_right as i32)
    }

    /// Every seat of the cabin, row-major, each row ordered as [`seat_offsets`](Self::seat_offsets).
    pub fn all_seats(&self) -> Vec<SeatCoord> {
        let mut seats = Vec::with_capacity(self.capacity());
        for row in self.real_rows() {
            seats.extend(self.seat_offsets().map(|offset| SeatCoord::new(row, offset)));
        }
        seats
    }

    /// `true` if `seat` names a real seat of this cabin.
    pub fn contains(&self, seat: SeatCoord) -> bool {
        let width = match seat.offset {
            0 => return false,
            o if o > 0 => self.seats_right,
            _ => self.seats_left,
        };
        self.real_rows().contains(&seat.row) && seat.distance() <= width
    }

    /// Reject shapes the stepper cannot run.
    ///
    /// At least one buffer row is required: passengers enter the aisle at row
    /// 0 and must walk at least one row before reaching a seat row.
    pub fn validate(&self) -> BoardingResult<()> {
        if self.rows == 0 {
            return Err(BoardingError::Config("aircraft must have at least one row".into()));
        }
        if self.dummy_rows == 0 {
            return Err(BoardingError::Config("aircraft must have at least one dummy row".into()));
        }
        if self.seats_per_row() == 0 {
            return Err(BoardingError::Config("aircraft rows must have at least one seat".into()));
        }
        Ok(())
    }
}

// ── Speeds ────────────────────────────────────────────────────────────────────

/// Durations, in ticks, of the elementary passenger actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Speeds {
    /// Walking from one aisle row to the next.
    pub move_ticks:    u64,
    /// Stepping one seat column (also the per-column step-out time when vacating).
    pub seating_ticks: u64,
    /// Putting a bag in the overhead bin.
    pub stow_ticks:    u64,
}

impl Default for Speeds {
    fn default() -> Self {
        Self { move_ticks: 2, seating_ticks: 3, stow_ticks: 3 }
    }
}

impl Speeds {
    pub fn validate(&self) -> BoardingResult<()> {
        if self.move_ticks == 0 || self.seating_ticks == 0 || self.stow_ticks == 0 {
            return Err(BoardingError::Config(format!(
                "action durations must be at least one tick, got {self:?}"
            )));
        }
        Ok(())
    }
}

// ── PassengerLoad ─────────────────────────────────────────────────────────────

/// How many passengers board: an absolute count or a load factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassengerLoad {
    Count(usize),
    /// Fraction of capacity in `[0, 1]`, rounded down.
    Proportion(f64),
}

impl Default for PassengerLoad {
    fn default() -> Self {
        PassengerLoad::Proportion(1.0)
    }
}

impl PassengerLoad {
    /// Resolve to a passenger count for `aircraft`, failing if it would not fit.
    pub fn resolve(&self, aircraft: &AircraftConfig) -> BoardingResult<usize> {
        let capacity = aircraft.capacity();
        let requested = match *self {
            PassengerLoad::Count(n) => n,
            PassengerLoad::Proportion(p) => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(BoardingError::Config(format!(
                        "passenger proportion must be within [0, 1], got {p}"
                    )));
                }
                (p * capacity as f64) as usize
            }
        };
        if requested > capacity {
            return Err(BoardingError::TooManyPassengers { requested, capacity });
        }
        Ok(requested)
    }
}
