//! Seat sampling and boarding-queue construction.

use board_core::{AircraftConfig, BoardingError, BoardingResult, SeatCoord, SimRng};

use crate::{BoardingOrder, BoardingPolicy, ZoneScore, zone_score};

/// One entry of the boarding queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boarding {
    pub seat:        SeatCoord,
    pub zone:        ZoneScore,
    pub has_baggage: bool,
}

/// Output of [`assign_seats`].
#[derive(Clone, Debug)]
pub struct ZoneAssignment {
    /// The boarding queue.  Position `i` becomes passenger `i + 1`.
    pub boardings: Vec<Boarding>,
    /// Zone score per assigned seat.
    pub order:     BoardingOrder,
}

/// Sample `passengers` seats of `aircraft` and order them under `policy`.
///
/// Each passenger carries baggage with probability `baggage_share`.
/// Baggage is drawn after the seats, in queue order, so the seat draw for a
/// given seed does not depend on `baggage_share`.
///
/// Fails before touching the RNG if the cabin is invalid or too small.
pub fn assign_seats(
    aircraft:      &AircraftConfig,
    passengers:    usize,
    policy:        BoardingPolicy,
    baggage_share: f64,
    rng:           &mut SimRng,
) -> BoardingResult<ZoneAssignment> {
    aircraft.validate()?;
    let capacity = aircraft.capacity();
    if passengers > capacity {
        return Err(BoardingError::TooManyPassengers { requested: passengers, capacity });
    }

    let all_seats = aircraft.all_seats();
    let mut scored: Vec<(SeatCoord, ZoneScore)> = rng
        .sample_indices(all_seats.len(), passengers)
        .into_iter()
        .map(|i| {
            let seat = all_seats[i];
            (seat, zone_score(policy, seat, aircraft))
        })
        .collect();

    // Stable: equal zones keep their draw order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut order = BoardingOrder::new(*aircraft);
    let boardings = scored
        .into_iter()
        .map(|(seat, zone)| {
            order.record(seat, zone);
            Boarding { seat, zone, has_baggage: rng.gen_bool(baggage_share) }
        })
        .collect();

    log::debug!("assigned {passengers} of {capacity} seats under {policy}");
    Ok(ZoneAssignment { boardings, order })
}
