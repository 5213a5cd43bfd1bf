//! Unit tests for board-core primitives.

#[cfg(test)]
mod ids {
    use crate::PassengerId;

    #[test]
    fn slot_roundtrip() {
        let id = PassengerId::from_slot(41);
        assert_eq!(id.get(), 42);
        assert_eq!(id.slot(), 41);
        assert_eq!(PassengerId::new(42), Some(id));
    }

    #[test]
    fn zero_is_not_an_id() {
        assert_eq!(PassengerId::new(0), None);
        assert_eq!(std::mem::size_of::<Option<PassengerId>>(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId::from_slot(6).to_string(), "P7");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert!(t < t + 1);
    }

    #[test]
    fn advance() {
        let mut t = Tick::ZERO;
        t.advance();
        t.advance();
        assert_eq!(t, Tick(2));
        assert_eq!(t.to_string(), "T2");
    }
}

#[cfg(test)]
mod seat {
    use crate::{SeatCoord, Side};

    #[test]
    fn side_and_distance() {
        let left = SeatCoord::new(4, -3);
        assert_eq!(left.side(), Side::Left);
        assert_eq!(left.distance(), 3);
        assert_eq!(left.column(), 2);

        let right = SeatCoord::new(4, 1);
        assert_eq!(right.side(), Side::Right);
        assert_eq!(right.column(), 0);
    }

    #[test]
    fn side_codes() {
        assert_eq!(Side::Left.code(), 0);
        assert_eq!(Side::Right.code(), 1);
        assert_eq!(Side::from_code(1), Some(Side::Right));
        assert_eq!(Side::from_code(2), None);
        assert_eq!(Side::Left.step(), -1);
    }
}

#[cfg(test)]
mod config {
    use crate::{AircraftConfig, BoardingError, PassengerLoad, SeatCoord, Speeds};

    #[test]
    fn default_matches_reference_cabin() {
        let a = AircraftConfig::default();
        assert_eq!(a.capacity(), 96);
        assert_eq!(a.total_rows(), 18);
        assert_eq!(a.real_rows(), 2..18);
        assert_eq!(a.block_width(), 3);
    }

    #[test]
    fn seat_offsets_skip_the_aisle() {
        let a = AircraftConfig::new(1, 2, 3);
        let offsets: Vec<i32> = a.seat_offsets().collect();
        assert_eq!(offsets, vec![-2, -1, 1, 2, 3]);
    }

    #[test]
    fn all_seats_row_major() {
        let a = AircraftConfig::new(2, 1, 1);
        assert_eq!(
            a.all_seats(),
            vec![
                SeatCoord::new(2, -1),
                SeatCoord::new(2, 1),
                SeatCoord::new(3, -1),
                SeatCoord::new(3, 1),
            ]
        );
    }

    #[test]
    fn contains() {
        let a = AircraftConfig::new(2, 1, 2);
        assert!(a.contains(SeatCoord { row: 3, offset: 2 }));
        assert!(!a.contains(SeatCoord { row: 3, offset: -2 }));
        assert!(!a.contains(SeatCoord { row: 1, offset: 1 }));
        assert!(!a.contains(SeatCoord { row: 2, offset: 0 }));
    }

    #[test]
    fn validate_rejects_degenerate_shapes() {
        assert!(AircraftConfig::new(0, 3, 3).validate().is_err());
        assert!(AircraftConfig::new(4, 0, 0).validate().is_err());
        assert!(AircraftConfig::new(4, 3, 3).with_dummy_rows(0).validate().is_err());
        assert!(AircraftConfig::new(4, 0, 2).validate().is_ok());
    }

    #[test]
    fn speeds_validate() {
        assert!(Speeds::default().validate().is_ok());
        let zero = Speeds { move_ticks: 0, ..Speeds::default() };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn load_resolution() {
        let a = AircraftConfig::new(16, 3, 3);
        assert_eq!(PassengerLoad::Count(10).resolve(&a).unwrap(), 10);
        assert_eq!(PassengerLoad::Proportion(1.0).resolve(&a).unwrap(), 96);
        assert_eq!(PassengerLoad::Proportion(0.8).resolve(&a).unwrap(), 76);
    }

    #[test]
    fn load_over_capacity_fails() {
        let a = AircraftConfig::new(1, 1, 1);
        match PassengerLoad::Count(3).resolve(&a) {
            Err(BoardingError::TooManyPassengers { requested: 3, capacity: 2 }) => {}
            other => panic!("expected TooManyPassengers, got {other:?}"),
        }
        assert!(PassengerLoad::Proportion(1.5).resolve(&a).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        assert_eq!(r1.sample_indices(50, 20), r2.sample_indices(50, 20));
    }

    #[test]
    fn sample_is_distinct_and_in_range() {
        let mut rng = SimRng::new(7);
        let mut picked = rng.sample_indices(30, 30);
        assert!(picked.iter().all(|&i| i < 30));
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 30);
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        assert_ne!(a.sample_indices(1000, 5), b.sample_indices(1000, 5));
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
