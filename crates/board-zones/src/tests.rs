//! Unit tests for board-zones.

use board_core::{AircraftConfig, SeatCoord, SimRng};

use crate::{BoardingPolicy, assign_seats, zone_score};

fn reference_cabin() -> AircraftConfig {
    AircraftConfig::new(16, 3, 3)
}

/// Full-load queue for `policy` with all baggage off.
fn full_queue(policy: BoardingPolicy, seed: u64) -> Vec<SeatCoord> {
    let cabin = reference_cabin();
    let mut rng = SimRng::new(seed);
    assign_seats(&cabin, cabin.capacity(), policy, 0.0, &mut rng)
        .unwrap()
        .boardings
        .into_iter()
        .map(|b| b.seat)
        .collect()
}

#[cfg(test)]
mod policy_tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for policy in BoardingPolicy::ALL {
            assert_eq!(policy.name().parse::<BoardingPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_dashes() {
        assert_eq!("Steffen-Modified".parse::<BoardingPolicy>().unwrap(), BoardingPolicy::SteffenModified);
        assert_eq!(" RANDOM ".parse::<BoardingPolicy>().unwrap(), BoardingPolicy::Random);
    }

    #[test]
    fn unknown_policy_fails() {
        let err = "boarding_by_height".parse::<BoardingPolicy>().unwrap_err();
        assert!(matches!(err, board_core::BoardingError::UnknownPolicy(_)));
    }

    #[test]
    fn thirteen_distinct_policies() {
        let mut names: Vec<&str> = BoardingPolicy::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn random_scores_zero_everywhere() {
        let cabin = reference_cabin();
        assert!(cabin.all_seats().into_iter().all(|s| zone_score(BoardingPolicy::Random, s, &cabin) == 0));
    }

    #[test]
    fn back_to_front_prefers_back_rows() {
        let cabin = reference_cabin();
        let back = SeatCoord::new(17, 2);
        let front = SeatCoord::new(2, 2);
        let p = BoardingPolicy::BackToFrontByRows;
        assert_eq!(zone_score(p, front, &cabin), 0);
        assert_eq!(zone_score(p, back, &cabin), 15);
        let q = BoardingPolicy::FrontToBackByRows;
        assert!(zone_score(q, front, &cabin) > zone_score(q, back, &cabin));
    }

    #[test]
    fn window_to_aisle_layers() {
        let cabin = reference_cabin();
        let p = BoardingPolicy::WindowToAisle;
        assert_eq!(zone_score(p, SeatCoord::new(5, -3), &cabin), 2);
        assert_eq!(zone_score(p, SeatCoord::new(5, 2), &cabin), 1);
        assert_eq!(zone_score(p, SeatCoord::new(5, 1), &cabin), 0);
    }

    #[test]
    fn row_then_window_tiebreak() {
        let cabin = reference_cabin();
        let p = BoardingPolicy::BackToFrontByRowsWindowToAisle;
        let window = zone_score(p, SeatCoord::new(10, 3), &cabin);
        let aisle = zone_score(p, SeatCoord::new(10, -1), &cabin);
        let next_row_aisle = zone_score(p, SeatCoord::new(11, 1), &cabin);
        assert!(window > aisle);
        assert!(next_row_aisle > window);
    }

    #[test]
    fn scores_are_never_negative() {
        for dummy in 1..=3 {
            for (rows, left, right) in [(1, 1, 1), (3, 3, 3), (16, 3, 3), (7, 2, 3), (5, 0, 4)] {
                let cabin = AircraftConfig::new(rows, left, right).with_dummy_rows(dummy);
                for p in BoardingPolicy::ALL {
                    for seat in cabin.all_seats() {
                        assert!(zone_score(p, seat, &cabin) >= 0, "{p} {seat} dummy {dummy}");
                    }
                }
            }
        }
    }

    #[test]
    fn spacing_score_range() {
        let cabin = AircraftConfig::new(3, 3, 3).with_dummy_rows(1);
        let p = BoardingPolicy::BackToFrontByRowsWithSpacing;
        // Back row, left side: first batch, top score.
        assert_eq!(zone_score(p, SeatCoord::new(3, -1), &cabin), 30);
        // Front row, right side: batch 5, from_back 2.
        assert_eq!(zone_score(p, SeatCoord::new(1, 1), &cabin), 3);
    }

    #[test]
    fn two_zones_split_cabin_in_half() {
        let cabin = reference_cabin();
        let p = BoardingPolicy::BackToFront2Zones;
        // Real rows 2..=17; first 8 are the front zone.
        assert_eq!(zone_score(p, SeatCoord::new(2, 1), &cabin), 0);
        assert_eq!(zone_score(p, SeatCoord::new(9, 1), &cabin), 0);
        assert_eq!(zone_score(p, SeatCoord::new(10, 1), &cabin), 1);
        assert_eq!(zone_score(p, SeatCoord::new(17, 1), &cabin), 1);
    }

    #[test]
    fn four_zones_cover_every_band() {
        let cabin = reference_cabin();
        let p = BoardingPolicy::BackToFront4Zones;
        let mut zones: Vec<i64> = cabin.real_rows().map(|r| zone_score(p, SeatCoord::new(r, 1), &cabin)).collect();
        assert!(zones.windows(2).all(|w| w[0] <= w[1]));
        zones.dedup();
        assert_eq!(zones, vec![0, 1, 2, 3]);
    }

    #[test]
    fn one_person_per_row_left_block_first() {
        let cabin = reference_cabin();
        let p = BoardingPolicy::WindowToAisleBackToFrontOnePersonPerRow;
        let left_aisle = zone_score(p, SeatCoord::new(2, -1), &cabin);
        let right_window = zone_score(p, SeatCoord::new(17, 3), &cabin);
        assert!(left_aisle > right_window);
    }
}

#[cfg(test)]
mod assign_tests {
    use super::*;

    #[test]
    fn queue_is_a_bijection_onto_sampled_seats() {
        let cabin = reference_cabin();
        let mut rng = SimRng::new(3);
        let a = assign_seats(&cabin, 70, BoardingPolicy::Steffen, 1.0, &mut rng).unwrap();
        assert_eq!(a.boardings.len(), 70);
        let mut seats: Vec<(usize, i32)> = a.boardings.iter().map(|b| (b.seat.row, b.seat.offset)).collect();
        seats.sort_unstable();
        seats.dedup();
        assert_eq!(seats.len(), 70);
        assert!(a.boardings.iter().all(|b| cabin.contains(b.seat)));
    }

    #[test]
    fn queue_sorted_by_descending_zone() {
        for policy in BoardingPolicy::ALL {
            let cabin = reference_cabin();
            let mut rng = SimRng::new(11);
            let a = assign_seats(&cabin, 60, policy, 1.0, &mut rng).unwrap();
            assert!(
                a.boardings.windows(2).all(|w| w[0].zone >= w[1].zone),
                "{policy} queue not sorted"
            );
        }
    }

    #[test]
    fn random_policy_is_draw_order() {
        let cabin = reference_cabin();
        let all = cabin.all_seats();
        let drawn: Vec<SeatCoord> = SimRng::new(99).sample_indices(all.len(), 40).into_iter().map(|i| all[i]).collect();

        let mut rng = SimRng::new(99);
        let a = assign_seats(&cabin, 40, BoardingPolicy::Random, 1.0, &mut rng).unwrap();
        let queued: Vec<SeatCoord> = a.boardings.iter().map(|b| b.seat).collect();
        assert_eq!(queued, drawn);
    }

    #[test]
    fn ties_keep_draw_order() {
        let cabin = reference_cabin();
        let all = cabin.all_seats();
        let drawn: Vec<SeatCoord> = SimRng::new(5).sample_indices(all.len(), 96).into_iter().map(|i| all[i]).collect();
        let queued = full_queue(BoardingPolicy::BackToFrontByRows, 5);

        // Within each row the queue must follow the sampler's order.
        for row in cabin.real_rows() {
            let in_draw: Vec<_> = drawn.iter().filter(|s| s.row == row).collect();
            let in_queue: Vec<_> = queued.iter().filter(|s| s.row == row).collect();
            assert_eq!(in_draw, in_queue, "row {row}");
        }
    }

    #[test]
    fn same_seed_same_queue() {
        assert_eq!(full_queue(BoardingPolicy::Random, 8), full_queue(BoardingPolicy::Random, 8));
    }

    #[test]
    fn steffen_boards_alternate_right_windows_first() {
        let queue = full_queue(BoardingPolicy::Steffen, 1);
        let first: Vec<SeatCoord> = queue[..8].to_vec();
        let expected: Vec<SeatCoord> = [17, 15, 13, 11, 9, 7, 5, 3].iter().map(|&r| SeatCoord::new(r, 3)).collect();
        assert_eq!(first, expected);
        let second: Vec<SeatCoord> = queue[8..16].to_vec();
        let expected: Vec<SeatCoord> = [17, 15, 13, 11, 9, 7, 5, 3].iter().map(|&r| SeatCoord::new(r, -3)).collect();
        assert_eq!(second, expected);
    }

    #[test]
    fn spacing_first_batch_is_left_side_every_third_row() {
        let queue = full_queue(BoardingPolicy::BackToFrontByRowsWithSpacing, 2);
        let batch = &queue[..18];
        assert!(batch.iter().all(|s| s.offset < 0));
        assert!(batch.iter().all(|s| [17, 14, 11, 8, 5, 2].contains(&s.row)));
        assert!(batch.windows(2).all(|w| w[0].row >= w[1].row));
    }

    #[test]
    fn baggage_share_extremes() {
        let cabin = reference_cabin();
        let none = assign_seats(&cabin, 20, BoardingPolicy::Random, 0.0, &mut SimRng::new(1)).unwrap();
        assert!(none.boardings.iter().all(|b| !b.has_baggage));
        let all = assign_seats(&cabin, 20, BoardingPolicy::Random, 1.0, &mut SimRng::new(1)).unwrap();
        assert!(all.boardings.iter().all(|b| b.has_baggage));
    }

    #[test]
    fn over_capacity_is_rejected() {
        let cabin = AircraftConfig::new(1, 1, 1);
        let result = assign_seats(&cabin, 3, BoardingPolicy::Random, 1.0, &mut SimRng::new(0));
        assert!(matches!(result, Err(board_core::BoardingError::TooManyPassengers { .. })));
    }

    #[test]
    fn zero_passengers_is_an_empty_queue() {
        let cabin = reference_cabin();
        let a = assign_seats(&cabin, 0, BoardingPolicy::Steffen, 1.0, &mut SimRng::new(0)).unwrap();
        assert!(a.boardings.is_empty());
    }
}

#[cfg(test)]
mod order_tests {
    use super::*;

    #[test]
    fn order_grid_mirrors_queue_scores() {
        let cabin = reference_cabin();
        let a = assign_seats(&cabin, 50, BoardingPolicy::BackToFront3Zones, 1.0, &mut SimRng::new(4)).unwrap();
        for b in &a.boardings {
            assert_eq!(a.order.get(b.seat), Some(b.zone));
        }
        let assigned = cabin.all_seats().into_iter().filter(|&s| a.order.get(s).is_some()).count();
        assert_eq!(assigned, 50);
    }

    #[test]
    fn display_one_line_per_real_row() {
        let cabin = AircraftConfig::new(2, 1, 2);
        let mut order = crate::BoardingOrder::new(cabin);
        order.record(SeatCoord::new(2, -1), 4);
        order.record(SeatCoord::new(3, 2), 7);
        assert_eq!(order.to_string(), "4 | . .\n. | . 7\n");
    }
}
