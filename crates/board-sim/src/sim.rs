//! The `Simulation` struct, the passenger state machine, and the tick loop.

use board_core::{PassengerId, SeatCoord, SimRng, Tick};
use board_zones::{Boarding, BoardingOrder, assign_seats};

use crate::{
    Cabin, History, NoopObserver, Passenger, PassengerState, SimConfig, SimError, SimObserver,
    SimResult, VacateAction, VacateCoordinator,
};

// ── Simulation ────────────────────────────────────────────────────────────────

/// One boarding simulation: cabin grid, passengers, vacate coordinator,
/// history, and clock, owned together.
///
/// Nothing here is shared between instances, so independent simulations can
/// run side by side (see [`crate::batch`]).
///
/// Create via [`SimBuilder`][crate::SimBuilder].  Every [`run`](Self::run)
/// starts with a [`reset`](Self::reset), which re-samples the boarding queue
/// unless the builder pinned a manifest.
pub struct Simulation {
    pub(crate) config:          SimConfig,
    pub(crate) passenger_count: usize,
    /// Fixed boarding queue replacing zone assignment, if any.
    pub(crate) manifest:        Option<Vec<Boarding>>,
    pub(crate) rng:             SimRng,

    pub(crate) tick:            Tick,
    pub(crate) cabin:           Cabin,
    /// Boarding queue order: passenger `n` is at index `n - 1`.
    pub(crate) passengers:      Vec<Passenger>,
    pub(crate) vacating:        VacateCoordinator,
    pub(crate) history:         History,
    pub(crate) boarding_order:  BoardingOrder,

    /// Total boarding time of every completed run since the last `reset_stats`.
    pub(crate) boarding_times:  Vec<u64>,
}

impl Simulation {
    pub(crate) fn new(
        config:          SimConfig,
        passenger_count: usize,
        manifest:        Option<Vec<Boarding>>,
        rng:             SimRng,
    ) -> SimResult<Self> {
        let aircraft = config.aircraft;
        let mut sim = Self {
            config,
            passenger_count,
            manifest,
            rng,
            tick:           Tick::ZERO,
            cabin:          Cabin::new(aircraft),
            passengers:     Vec::new(),
            vacating:       VacateCoordinator::new(),
            history:        History::new(),
            boarding_order: BoardingOrder::new(aircraft),
            boarding_times: Vec::new(),
        };
        sim.reset()?;
        Ok(sim)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Rebuild the cabin, passengers, vacate map, and history for a new run.
    pub fn reset(&mut self) -> SimResult<()> {
        let aircraft = self.config.aircraft;
        let boardings = match &self.manifest {
            Some(manifest) => {
                let mut order = BoardingOrder::new(aircraft);
                for b in manifest {
                    order.record(b.seat, b.zone);
                }
                self.boarding_order = order;
                manifest.clone()
            }
            None => {
                let assignment = assign_seats(
                    &aircraft,
                    self.passenger_count,
                    self.config.policy,
                    self.config.baggage_share,
                    &mut self.rng,
                )?;
                self.boarding_order = assignment.order;
                assignment.boardings
            }
        };

        self.tick = Tick::ZERO;
        self.cabin = Cabin::new(aircraft);
        self.vacating = VacateCoordinator::new();
        self.history = History::new();
        self.passengers = boardings
            .iter()
            .enumerate()
            .map(|(slot, b)| Passenger::queued(PassengerId::from_slot(slot), b))
            .collect();
        Ok(())
    }

    /// Run one boarding to completion and return its total time.
    ///
    /// There is no tick limit: a configuration that livelocks never returns.
    /// Use [`run_with_budget`](Self::run_with_budget) when that matters.
    pub fn run(&mut self) -> SimResult<Tick> {
        self.drive(None, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), with observer callbacks every tick.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        self.drive(None, observer)
    }

    /// Like [`run`](Self::run), but fail with
    /// [`SimError::TickBudgetExceeded`] if boarding is not done by tick `budget`.
    pub fn run_with_budget(&mut self, budget: u64) -> SimResult<Tick> {
        self.drive(Some(budget), &mut NoopObserver)
    }

    /// Run `n` boardings back to back, appending each time to
    /// [`boarding_times`](Self::boarding_times).
    pub fn run_multiple(&mut self, n: usize) -> SimResult<()> {
        for _ in 0..n {
            self.run()?;
        }
        Ok(())
    }

    /// Advance the simulation by one tick at the current time.
    ///
    /// Order inside a tick is fixed: due vacates first, then every boarded
    /// passenger in queue order, then at most one passenger out of the queue.
    /// Returns `true` if every passenger was already seated once the vacates
    /// were resolved.
    pub fn step(&mut self) -> bool {
        let now = self.tick;
        self.resolve_vacates(now);
        let all_seated = self.passengers.iter().all(|p| p.state.is_terminal());

        // Passengers leave the queue strictly in list order, so everything
        // before the head has boarded and everything from it on is queued.
        let head = self
            .passengers
            .iter()
            .position(|p| p.state == PassengerState::Queued)
            .unwrap_or(self.passengers.len());
        debug_assert!(self.passengers[head..].iter().all(|p| p.state == PassengerState::Queued));

        for slot in 0..head {
            if self.passengers[slot].is_due(now) {
                self.update(slot, now);
            }
        }
        if head < self.passengers.len() && self.passengers[head].is_due(now) {
            self.admit(head, now);
        }

        all_seated
    }

    /// Forget the boarding times of previous runs.
    pub fn reset_stats(&mut self) {
        self.boarding_times.clear();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn cabin(&self) -> &Cabin {
        &self.cabin
    }

    /// Passengers in boarding-queue order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passenger(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.slot()]
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn seated_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.state.is_terminal()).count()
    }

    pub fn vacating(&self) -> &VacateCoordinator {
        &self.vacating
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Zone score of every assigned seat for the current run.
    pub fn boarding_order(&self) -> &BoardingOrder {
        &self.boarding_order
    }

    pub fn boarding_times(&self) -> &[u64] {
        &self.boarding_times
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    fn drive<O: SimObserver>(&mut self, budget: Option<u64>, observer: &mut O) -> SimResult<Tick> {
        self.reset()?;
        observer.on_reset(self);
        log::debug!(
            "boarding {} passengers under {}",
            self.passengers.len(),
            self.config.policy
        );

        loop {
            let finished = self.step();
            observer.on_tick_end(self.tick, self);
            if finished {
                break;
            }
            if let Some(budget) = budget {
                if self.tick.0 >= budget {
                    return Err(SimError::TickBudgetExceeded {
                        budget,
                        seated: self.seated_count(),
                        total:  self.passengers.len(),
                    });
                }
            }
            self.tick.advance();
        }

        log::debug!("all {} passengers seated at {}", self.passengers.len(), self.tick);
        self.boarding_times.push(self.tick.0);
        observer.on_run_end(self.tick, self);
        Ok(self.tick)
    }

    /// Apply the coordinator's releases and aisle clears for `now`.
    fn resolve_vacates(&mut self, now: Tick) {
        let seating = self.config.speeds.seating_ticks;
        for action in self.vacating.resolve(now, seating) {
            match action {
                VacateAction::Release { row, passenger } => {
                    let p = &mut self.passengers[passenger.slot()];
                    p.state = PassengerState::Seating;
                    p.x = 0;
                    p.next_action = now + seating;
                    self.history.record(passenger, now, 0, row, PassengerState::Vacating);
                }
                VacateAction::ClearAisle { row } => {
                    self.cabin.clear_aisle(row);
                    log::debug!("row {row} vacated at {now}");
                }
            }
        }
    }

    // ── Passenger state machine ───────────────────────────────────────────

    fn update(&mut self, slot: usize, now: Tick) {
        match self.passengers[slot].state {
            PassengerState::AisleWait => {
                self.walk(slot, now);
            }
            PassengerState::Moving => {
                if self.passengers[slot].at_seat_row() {
                    self.arrive(slot, now);
                } else if !self.walk(slot, now) {
                    let p = &mut self.passengers[slot];
                    p.state = PassengerState::AisleWait;
                    self.history.record(p.id, now, 0, p.y, PassengerState::AisleWait);
                }
            }
            PassengerState::StowingBaggage => self.stow(slot, now),
            PassengerState::Vacating => self.step_out(slot, now),
            PassengerState::Seating => self.seat_step(slot, now),
            // Driven by the vacate coordinator, the queue, or finished.
            PassengerState::Queued
            | PassengerState::WaitToSeat
            | PassengerState::Reseating
            | PassengerState::Seated => {}
            PassengerState::Undefined => {
                unreachable!("{} boarded without a state", self.passengers[slot].id)
            }
        }
    }

    /// Move the queue head into aisle row 0 if it is free.
    fn admit(&mut self, slot: usize, now: Tick) {
        if !self.cabin.is_aisle_free(0) {
            return;
        }
        let p = &mut self.passengers[slot];
        self.cabin.enter_aisle(0, p.id);
        p.state = PassengerState::AisleWait;
        p.x = 0;
        p.y = 0;
        p.next_action = now + 1;
        self.history.record(p.id, now, 0, 0, PassengerState::Queued);
    }

    /// Step one row down the aisle.  Returns `false` (and changes nothing)
    /// if the next row's aisle cell is taken or that row is being vacated.
    fn walk(&mut self, slot: usize, now: Tick) -> bool {
        let p = &mut self.passengers[slot];
        let next_row = p.y + 1;
        if !self.cabin.is_aisle_free(next_row) || self.vacating.is_vacating(next_row) {
            return false;
        }
        p.state = PassengerState::Moving;
        p.next_action = now + self.config.speeds.move_ticks;
        self.history.record(p.id, now, 0, p.y, PassengerState::Moving);
        self.cabin.advance_in_aisle(p.y, p.id);
        p.y = next_row;
        true
    }

    /// Reached the seat row: stow a bag first, or go straight for the seat.
    fn arrive(&mut self, slot: usize, now: Tick) {
        let p = &mut self.passengers[slot];
        if p.has_baggage {
            p.state = PassengerState::StowingBaggage;
            p.next_action = now + self.config.speeds.stow_ticks;
            self.history.record(p.id, now, 0, p.y, PassengerState::StowingBaggage);
        } else {
            self.take_seat(slot, now);
        }
    }

    fn stow(&mut self, slot: usize, now: Tick) {
        let seat = self.passengers[slot].seat;
        self.cabin.stow_bag(seat.row, seat.side());
        self.history.record_baggage(now, seat.row, seat.side());
        self.take_seat(slot, now);
    }

    /// Start seating if the way is clear, otherwise have the row vacated.
    fn take_seat(&mut self, slot: usize, now: Tick) {
        let (id, seat) = (self.passengers[slot].id, self.passengers[slot].seat);
        let (state, delay) = if self.cabin.is_seat_accessible(seat) {
            (PassengerState::Seating, self.config.speeds.seating_ticks)
        } else {
            (PassengerState::WaitToSeat, self.begin_vacate(id, seat, now))
        };
        let p = &mut self.passengers[slot];
        p.state = state;
        p.next_action = now + delay;
        self.history.record(id, now, 0, p.y, state);
    }

    /// Send every neighbour between the aisle and `seat` out of the row and
    /// register the vacate.  Returns how long `newcomer` has to wait.
    fn begin_vacate(&mut self, newcomer: PassengerId, seat: SeatCoord, now: Tick) -> u64 {
        let seating = self.config.speeds.seating_ticks;
        let mut queue = Vec::new();
        let mut wait = 0;

        for occupant in self.cabin.occupants_between(seat) {
            let p = &mut self.passengers[occupant.slot()];
            let step_out = p.seat.distance() as u64 * seating;
            p.state = PassengerState::Vacating;
            p.next_action = now + step_out;
            self.history.record(occupant, now, p.x, p.y, PassengerState::Vacating);
            queue.push(occupant);
            wait = step_out;
        }
        queue.push(newcomer);

        log::debug!(
            "{newcomer} needs row {} vacated: {} neighbour(s) step out for {wait} ticks",
            seat.row,
            queue.len() - 1
        );
        self.vacating.open(seat.row, queue, now + wait);
        wait
    }

    /// A vacating neighbour has reached the aisle side of its row.
    fn step_out(&mut self, slot: usize, now: Tick) {
        let p = &mut self.passengers[slot];
        if p.x != 0 {
            p.x = 0;
            self.history.record(p.id, now, 0, p.y, PassengerState::Vacating);
        }
    }

    /// Step one seat column towards the assigned seat.
    fn seat_step(&mut self, slot: usize, now: Tick) {
        let p = &mut self.passengers[slot];
        if p.x == 0 && !self.vacating.is_vacating(p.y) {
            self.cabin.clear_aisle_if(p.y, p.id);
        }
        p.x += p.seat.side().step();
        if p.x == p.seat.offset {
            p.state = PassengerState::Seated;
            self.cabin.occupy_seat(p.seat, p.id);
        } else {
            p.next_action = now + self.config.speeds.seating_ticks;
        }
        self.history.record(p.id, now, p.x, p.y, p.state);
    }
}
