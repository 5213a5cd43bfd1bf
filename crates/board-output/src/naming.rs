//! File-name conventions shared by the driver and the replay tool.
//!
//! | File           | Name                                              |
//! |----------------|---------------------------------------------------|
//! | boarding order | `<policy>_<rows>_<left>_boarding_order.txt`       |
//! | history        | `<policy>_<prop>_<rows>_<left>_history_<i>.txt`   |
//! | timing         | `<policy>_<prop>_<rows>_<left>_total_time.txt`    |
//!
//! `<policy>` is the lower-snake-case policy name, `<left>` the number of
//! seats left of the aisle.

use board_core::AircraftConfig;
use board_zones::BoardingPolicy;

/// Load factors always carry a decimal point: `1.0`, `0.8`.
pub fn format_proportion(p: f64) -> String {
    if p.fract() == 0.0 { format!("{p:.1}") } else { p.to_string() }
}

pub fn boarding_order_file_name(policy: BoardingPolicy, aircraft: &AircraftConfig) -> String {
    format!("{}_{}_{}_boarding_order.txt", policy.name(), aircraft.rows, aircraft.seats_left)
}

pub fn history_file_name(
    policy:     BoardingPolicy,
    proportion: f64,
    aircraft:   &AircraftConfig,
    run:        usize,
) -> String {
    format!(
        "{}_{}_{}_{}_history_{run}.txt",
        policy.name(),
        format_proportion(proportion),
        aircraft.rows,
        aircraft.seats_left
    )
}

pub fn timing_file_name(policy: BoardingPolicy, proportion: f64, aircraft: &AircraftConfig) -> String {
    format!(
        "{}_{}_{}_{}_total_time.txt",
        policy.name(),
        format_proportion(proportion),
        aircraft.rows,
        aircraft.seats_left
    )
}
