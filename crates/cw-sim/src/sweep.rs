//! The doubling duration sweep.
//!
//! # Schedule
//!
//! ```text
//! Seeding      max < 30  → emit max, Done
//!              otherwise → Doubling(30)
//! Doubling(d)  emit d
//!              d <= max / 2 → Doubling(2d)
//!              otherwise    → Closing
//! Closing      last emitted < max → emit max
//!              → Done
//! ```
//!
//! `100` gives `[30, 60, 100]`; `60` gives `[30, 60]` with no closing run
//! because the doubling already landed on `max`.

use cw_core::SWEEP_BASE_MINUTES;
use tracing::trace;

use crate::{ArrivalModel, NoopObserver, SimulationResult, WashObserver, WashSim};

/// Position of a [`Sweep`] in its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    /// Nothing emitted yet.
    Seeding,
    /// Next duration to emit on the doubling ladder.
    Doubling(u64),
    /// Doubling finished; a closing run at `max_minutes` may follow.
    Closing,
    Done,
}

/// Iterator over the durations of one sweep, in run order.
#[derive(Debug, Clone)]
pub struct Sweep {
    max_minutes: u64,
    state:       SweepState,
    last:        Option<u64>,
}

impl Sweep {
    pub fn new(max_minutes: u64) -> Self {
        Self {
            max_minutes,
            state: SweepState::Seeding,
            last:  None,
        }
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    pub fn max_minutes(&self) -> u64 {
        self.max_minutes
    }

    /// Advance the state machine by one transition.
    ///
    /// Returns the duration emitted by that transition, if any.  Some
    /// transitions (`Seeding → Doubling`, `Closing → Done` with no closing
    /// run) emit nothing.
    pub fn step(&mut self) -> Option<u64> {
        let max = self.max_minutes;
        let (next, emitted) = match self.state {
            SweepState::Seeding if max < SWEEP_BASE_MINUTES => (SweepState::Done, Some(max)),
            SweepState::Seeding => (SweepState::Doubling(SWEEP_BASE_MINUTES), None),
            SweepState::Doubling(d) if d <= max / 2 => (SweepState::Doubling(d * 2), Some(d)),
            SweepState::Doubling(d) => (SweepState::Closing, Some(d)),
            SweepState::Closing => {
                let closing = match self.last {
                    Some(last) if last >= max => None,
                    _ => Some(max),
                };
                (SweepState::Done, closing)
            }
            SweepState::Done => (SweepState::Done, None),
        };
        trace!(from = ?self.state, to = ?next, ?emitted, "sweep transition");
        self.state = next;
        if emitted.is_some() {
            self.last = emitted;
        }
        emitted
    }
}

impl Iterator for Sweep {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.state != SweepState::Done {
            if let Some(duration) = self.step() {
                return Some(duration);
            }
        }
        None
    }
}

impl<A: ArrivalModel> WashSim<A> {
    /// Run the engine once per duration of [`Sweep::new`]`(max_minutes)`,
    /// in schedule order, continuing one random stream.
    pub fn run_all(&mut self, max_minutes: u64) -> Vec<SimulationResult> {
        self.run_all_observed(max_minutes, &mut NoopObserver)
    }

    /// Like [`run_all`][Self::run_all], forwarding `observer` to every run.
    pub fn run_all_observed<O: WashObserver>(
        &mut self,
        max_minutes: u64,
        observer:    &mut O,
    ) -> Vec<SimulationResult> {
        Sweep::new(max_minutes)
            .map(|duration| self.run_observed(duration, observer))
            .collect()
    }
}
