//! Seat coordinates and cabin sides.
//!
//! A seat is addressed by its row and a *signed offset*: positive offsets
//! are in the right-hand block, negative ones in the left-hand block, and the
//! magnitude is the distance from the aisle (1 = aisle seat).  Offset 0 is the
//! aisle itself and never names a seat.

use std::fmt;

/// One of the two seat blocks either side of the aisle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Numeric code used by the history file (`0` = left, `1` = right).
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Option<Side> {
        match code {
            0 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }

    /// Unit step along the seat row when walking away from the aisle.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// A seat address: `(row, signed offset)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatCoord {
    /// Absolute row index, dummy rows included.
    pub row: usize,
    /// Signed distance from the aisle; never 0.
    pub offset: i32,
}

impl SeatCoord {
    #[inline]
    pub fn new(row: usize, offset: i32) -> Self {
        debug_assert!(offset != 0, "offset 0 is the aisle, not a seat");
        Self { row, offset }
    }

    #[inline]
    pub fn side(self) -> Side {
        if self.offset > 0 { Side::Right } else { Side::Left }
    }

    /// Distance from the aisle (1 = aisle seat).
    #[inline]
    pub fn distance(self) -> usize {
        self.offset.unsigned_abs() as usize
    }

    /// 0-based column inside its seat block, counted from the aisle.
    #[inline]
    pub fn column(self) -> usize {
        self.distance() - 1
    }
}

impl fmt::Display for SeatCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:+})", self.row, self.offset)
    }
}
