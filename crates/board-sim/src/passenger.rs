//! Per-passenger record and state enumeration.

use board_core::{PassengerId, SeatCoord, Tick};
use board_zones::Boarding;

/// Where a passenger is in the boarding process.
///
/// The discriminants are the state codes written to the history file.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum PassengerState {
    Undefined      = 0,
    /// Waiting outside the cabin for aisle row 0 to free up.
    Queued         = 1,
    /// In the aisle, blocked by the passenger (or vacating row) ahead.
    AisleWait      = 2,
    /// Walking one aisle row.
    Moving         = 3,
    StowingBaggage = 4,
    /// Standing at the row while seated neighbours step out.
    WaitToSeat     = 5,
    /// Stepping seat by seat towards the assigned seat.
    Seating        = 6,
    /// Temporarily out of the seat to let a neighbour through.
    Vacating       = 7,
    /// Defined for the history format; no transition enters it.
    Reseating      = 8,
    Seated         = 9,
}

impl PassengerState {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<PassengerState> {
        use PassengerState::*;
        Some(match code {
            0 => Undefined,
            1 => Queued,
            2 => AisleWait,
            3 => Moving,
            4 => StowingBaggage,
            5 => WaitToSeat,
            6 => Seating,
            7 => Vacating,
            8 => Reseating,
            9 => Seated,
            _ => return None,
        })
    }

    /// `true` only for [`PassengerState::Seated`].
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == PassengerState::Seated
    }
}

/// One agent of the simulation.
///
/// Position is `(x, y)`: `y` is the aisle row, `x` the signed seat column
/// (0 = standing in the aisle).  Both are meaningless while `Queued`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub id:          PassengerId,
    pub seat:        SeatCoord,
    pub has_baggage: bool,
    pub state:       PassengerState,
    pub x:           i32,
    pub y:           usize,
    /// Earliest tick at which the state machine may act on this passenger.
    pub next_action: Tick,
}

impl Passenger {
    /// A passenger waiting in the boarding queue.
    pub fn queued(id: PassengerId, boarding: &Boarding) -> Self {
        Self {
            id,
            seat:        boarding.seat,
            has_baggage: boarding.has_baggage,
            state:       PassengerState::Queued,
            x:           0,
            y:           0,
            next_action: Tick::ZERO,
        }
    }

    #[inline]
    pub fn is_due(&self, now: Tick) -> bool {
        self.next_action <= now
    }

    #[inline]
    pub fn at_seat_row(&self) -> bool {
        self.y == self.seat.row
    }
}
