//! `board-zones`: who boards when.
//!
//! Zone assignment runs once per simulation reset.  It samples the occupied
//! seats, scores each one under the selected [`BoardingPolicy`], and sorts the
//! seats into the boarding queue:
//!
//! ```text
//! all seats ──sample(n)──▶ drawn seats ──zone_score──▶ scored seats
//!                                                        │ stable sort, descending
//!                                                        ▼
//!                                              boarding queue (Vec<Boarding>)
//! ```
//!
//! The sort is stable, so seats that share a zone board in the order the
//! sampler drew them.  Under [`BoardingPolicy::Random`] every score is 0 and
//! the queue is exactly the draw order.
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`policy`]   | `BoardingPolicy` (13 variants), names, parsing      |
//! | [`score`]    | `zone_score`, one formula per policy                |
//! | [`assign`]   | `assign_seats`, `Boarding`, `ZoneAssignment`        |
//! | [`order`]    | `BoardingOrder` debug grids                         |

pub mod assign;
pub mod order;
pub mod policy;
pub mod score;

#[cfg(test)]
mod tests;

pub use assign::{Boarding, ZoneAssignment, assign_seats};
pub use order::BoardingOrder;
pub use policy::BoardingPolicy;
pub use score::{ZoneScore, zone_score};
