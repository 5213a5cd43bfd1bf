//! Zone-score formulas.
//!
//! Every policy is a pure function of the seat and the cabin shape.  Seats
//! are sorted by descending score, so the *largest* score boards first.
//!
//! Notation: `R` real rows, `D` dummy rows, `r` absolute row index, `o`
//! signed offset, `W` widest block.  `r - D` is therefore 0 for the front
//! row and `R - 1` for the back row.
//!
//! [`BoardingPolicy::Steffen`] and [`BoardingPolicy::BackToFrontByRowsWithSpacing`]
//! are naturally fractional; they are scaled by 2 and 3 respectively so
//! that every score is an exact integer with the same ordering.
//!
//! No formula produces a negative score; the boarding-order file reserves
//! `-1` for the aisle.

use board_core::{AircraftConfig, SeatCoord, Side};

use crate::BoardingPolicy;

/// Boarding priority of a seat.  Larger boards earlier.
pub type ZoneScore = i64;

/// Score `seat` under `policy` for the cabin `aircraft`.
pub fn zone_score(policy: BoardingPolicy, seat: SeatCoord, aircraft: &AircraftConfig) -> ZoneScore {
    let rows = aircraft.rows as i64;
    let dummy = aircraft.dummy_rows as i64;
    let row = seat.row as i64;
    let depth = seat.distance() as i64 - 1; // 0 = aisle seat
    let width = aircraft.block_width() as i64;
    let right = seat.side() == Side::Right;

    match policy {
        BoardingPolicy::Random => 0,
        BoardingPolicy::BackToFrontByRows => row - dummy,
        BoardingPolicy::FrontToBackByRows => rows - row + dummy,
        BoardingPolicy::BackToFrontByRowsWindowToAisle => (row - dummy) * width + depth,
        BoardingPolicy::FrontToBackByRowsWindowToAisle => (rows - row + dummy) * width + depth,
        BoardingPolicy::WindowToAisle => depth,
        BoardingPolicy::BackToFront2Zones => back_to_front_zone(seat, aircraft, 2),
        BoardingPolicy::BackToFront3Zones => back_to_front_zone(seat, aircraft, 3),
        BoardingPolicy::BackToFront4Zones => back_to_front_zone(seat, aircraft, 4),
        BoardingPolicy::WindowToAisleBackToFrontOnePersonPerRow => {
            let base = depth * rows + row - dummy;
            if right { base } else { aircraft.seats_right as i64 * rows + base }
        }
        BoardingPolicy::Steffen => {
            // Doubled: row / 2, plus R for every other row counted from the back,
            // plus half a cabin per (column, side) batch.
            let alternate = if (dummy + rows - row) % 2 == 1 { 2 * rows } else { 0 };
            let column_batch = 4 * depth + right as i64;
            row + alternate + column_batch * rows
        }
        BoardingPolicy::SteffenModified => 2 * ((dummy + rows - row) % 2) + right as i64,
        BoardingPolicy::BackToFrontByRowsWithSpacing => {
            // Tripled.  `from_back` is 0 for the back row and at most R - 1,
            // `batch` at most 5, so the score stays within 3..=6(R + 2).
            let from_back = dummy + rows - row - 1;
            let batch = 2 * (from_back % 3) + right as i64;
            6 * (rows + 2) - (batch * (rows + 2) + from_back)
        }
    }
}

/// Split the real rows into `zones` equal bands from the front; band `i`
/// (0 = front) scores `i`.
fn back_to_front_zone(seat: SeatCoord, aircraft: &AircraftConfig, zones: usize) -> ZoneScore {
    // Row r falls in the first band i with (r - D + 1) / R <= (i + 1) / zones.
    let position = seat.row + 1 - aircraft.dummy_rows;
    (0..zones)
        .find(|&i| position * zones <= aircraft.rows * (i + 1))
        .unwrap_or(zones - 1) as ZoneScore
}
