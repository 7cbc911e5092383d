//! The `WashSim` struct and its minute loop.

use std::collections::VecDeque;

use cw_core::{Minute, SimRng};
use tracing::debug;

use crate::{
    ArrivalModel, NoopObserver, SimulationResult, UniformArrivals, WaitStats, WashObserver,
    WashSimBuilder,
};

// ── WashSim ───────────────────────────────────────────────────────────────────

/// A single-bay car wash.
///
/// `WashSim<A>` owns the random stream and the arrival model; everything else
/// (queue, clock, wait totals) lives on the stack of one [`run`][Self::run]
/// call.  Consecutive runs continue the same random stream.
///
/// Create via [`WashSimBuilder`] or [`WashSim::seeded`].
pub struct WashSim<A: ArrivalModel = UniformArrivals> {
    /// Random stream shared by every run of this engine.
    pub rng: SimRng,

    /// Decides how many cars arrive each open minute.
    pub arrivals: A,
}

impl WashSim<UniformArrivals> {
    /// Engine with the default arrival distribution and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        WashSimBuilder::new().seed(seed).build()
    }
}

impl<A: ArrivalModel> WashSim<A> {
    pub fn new(rng: SimRng, arrivals: A) -> Self {
        Self { rng, arrivals }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate a wash open for `minutes` minutes and wait for its queue to
    /// drain.
    pub fn run(&mut self, minutes: u64) -> SimulationResult {
        self.run_observed(minutes, &mut NoopObserver)
    }

    /// Like [`run`][Self::run], calling observer hooks along the way.
    pub fn run_observed<O: WashObserver>(
        &mut self,
        minutes:  u64,
        observer: &mut O,
    ) -> SimulationResult {
        let closing = Minute(minutes);
        let mut queue: VecDeque<Minute> = VecDeque::new();
        let mut stats = WaitStats::new();
        let mut now = Minute::ZERO;

        while now < closing || !queue.is_empty() {
            // ── Arrivals: only while open ─────────────────────────────────
            if now < closing {
                let count = self.arrivals.arrivals(now, &mut self.rng);
                if count > 0 {
                    queue.extend(std::iter::repeat_n(now, count as usize));
                    observer.on_arrival(now, count);
                }
            }

            // ── Service: one car per minute, oldest first ─────────────────
            if let Some(arrived) = queue.pop_front() {
                let wait = now.since(arrived);
                stats.record(wait);
                observer.on_service(now, wait);
            }

            observer.on_minute_end(now, queue.len());
            now = now.next();
        }

        let result = stats.finish(minutes);
        debug!(
            duration     = result.duration,
            cars         = result.total_cars,
            longest_wait = result.longest_wait,
            drained_at   = now.0,
            "car wash run complete"
        );
        observer.on_run_end(&result);
        result
    }
}
