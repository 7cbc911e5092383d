//! Unit tests for cw-sim.

use cw_core::{Minute, SimRng};

use crate::{ArrivalModel, SimulationResult, WashObserver, WashSim, WashSimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The same number of cars every open minute.
struct Fixed(u32);

impl ArrivalModel for Fixed {
    fn arrivals(&mut self, _minute: Minute, _rng: &mut SimRng) -> u32 {
        self.0
    }
}

/// Replays a per-minute script, then no arrivals.
struct Scripted {
    script: Vec<u32>,
    calls:  Vec<Minute>,
}

impl Scripted {
    fn new(script: &[u32]) -> Self {
        Self { script: script.to_vec(), calls: Vec::new() }
    }
}

impl ArrivalModel for Scripted {
    fn arrivals(&mut self, minute: Minute, _rng: &mut SimRng) -> u32 {
        self.calls.push(minute);
        self.script.get(self.calls.len() - 1).copied().unwrap_or(0)
    }
}

fn fixed_sim(cars_per_minute: u32) -> WashSim<Fixed> {
    WashSimBuilder::new().seed(0).arrivals(Fixed(cars_per_minute)).build()
}

fn durations(results: &[SimulationResult]) -> Vec<u64> {
    results.iter().map(|r| r.duration).collect()
}

// ── WaitStats / SimulationResult ──────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use crate::WaitStats;

    #[test]
    fn empty_stats_finish_to_zeroes() {
        let r = WaitStats::new().finish(30);
        assert_eq!(r.duration, 30);
        assert_eq!(r.total_cars, 0);
        assert_eq!(r.longest_wait, 0);
        assert_eq!(r.average_wait, 0.0);
    }

    #[test]
    fn record_tracks_total_and_max() {
        let mut s = WaitStats::new();
        for w in [0, 4, 2] {
            s.record(w);
        }
        assert_eq!(s.cars, 3);
        assert_eq!(s.total_wait, 6);
        assert_eq!(s.longest_wait, 4);
        assert_eq!(s.average(), 2.0);
    }
}

// ── Arrival model ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrivals {
    use cw_core::{Minute, SimRng};

    use crate::{ArrivalModel, UniformArrivals};

    #[test]
    fn draw_table() {
        assert_eq!(UniformArrivals::cars_for_draw(0), 0);
        assert_eq!(UniformArrivals::cars_for_draw(1), 0);
        assert_eq!(UniformArrivals::cars_for_draw(2), 1);
        assert_eq!(UniformArrivals::cars_for_draw(3), 2);
    }

    #[test]
    fn uniform_arrivals_roughly_three_quarters_per_minute() {
        let mut rng = SimRng::new(99);
        let mut model = UniformArrivals;
        let n = 40_000u64;
        let mut counts = [0u64; 3];
        for m in 0..n {
            let cars = model.arrivals(Minute(m), &mut rng);
            counts[cars as usize] += 1;
        }
        // Expected 1/2, 1/4, 1/4.
        let frac = |c: u64| c as f64 / n as f64;
        assert!((frac(counts[0]) - 0.50).abs() < 0.02, "{counts:?}");
        assert!((frac(counts[1]) - 0.25).abs() < 0.02, "{counts:?}");
        assert!((frac(counts[2]) - 0.25).abs() < 0.02, "{counts:?}");
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn zero_minutes_washes_nothing() {
        let mut sim = WashSim::seeded(1);
        let r = sim.run(0);
        assert_eq!(r.duration, 0);
        assert_eq!(r.total_cars, 0);
        assert_eq!(r.longest_wait, 0);
        assert_eq!(r.average_wait, 0.0);
    }

    #[test]
    fn zero_minutes_consumes_no_draws() {
        let mut a = WashSim::seeded(5);
        a.run(0);
        let after_empty = a.run(50);

        let mut b = WashSim::seeded(5);
        assert_eq!(after_empty, b.run(50));
    }

    #[test]
    fn one_car_per_minute_never_waits() {
        let r = fixed_sim(1).run(25);
        assert_eq!(r.total_cars, 25);
        assert_eq!(r.longest_wait, 0);
        assert_eq!(r.average_wait, 0.0);
    }

    #[test]
    fn no_arrivals_yields_empty_result() {
        let r = fixed_sim(0).run(100);
        assert_eq!(r.duration, 100);
        assert_eq!(r.total_cars, 0);
        assert_eq!(r.longest_wait, 0);
        assert_eq!(r.average_wait, 0.0);
    }

    #[test]
    fn two_cars_per_minute_builds_a_queue_that_drains() {
        // t0: +2, wash arrival 0 (wait 0)   queue [0]
        // t1: +2, wash arrival 0 (wait 1)   queue [1,1]
        // t2: +2, wash arrival 1 (wait 1)   queue [1,2,2]
        // t3..t5 closed: waits 2, 2, 3
        let r = fixed_sim(2).run(3);
        assert_eq!(r.duration, 3);
        assert_eq!(r.total_cars, 6);
        assert_eq!(r.longest_wait, 3);
        assert_eq!(r.average_wait, 1.5);
    }

    #[test]
    fn arrivals_only_drawn_while_open() {
        let mut sim = WashSimBuilder::new()
            .seed(0)
            .arrivals(Scripted::new(&[2, 2, 2, 2]))
            .build();
        sim.run(4);
        let calls: Vec<u64> = sim.arrivals.calls.iter().map(|m| m.0).collect();
        assert_eq!(calls, vec![0, 1, 2, 3]);
    }

    #[test]
    fn last_minute_arrivals_are_still_washed() {
        // Two cars arrive in the final open minute (t = 4).
        let mut sim = WashSimBuilder::new()
            .seed(0)
            .arrivals(Scripted::new(&[0, 0, 0, 0, 2]))
            .build();
        let r = sim.run(5);
        assert_eq!(r.total_cars, 2);
        assert_eq!(r.longest_wait, 1);
        assert_eq!(r.average_wait, 0.5);
    }

    #[test]
    fn fifo_service_order() {
        // Car at t0, two at t1, none after: waits 0, 0, 1.
        let mut sim = WashSimBuilder::new()
            .seed(0)
            .arrivals(Scripted::new(&[1, 2]))
            .build();
        let mut obs = Recorder::default();
        let r = sim.run_observed(2, &mut obs);
        assert_eq!(obs.waits, vec![0, 0, 1]);
        assert_eq!(r.total_cars, 3);
        assert_eq!(r.longest_wait, 1);
    }

    #[test]
    fn same_seed_same_result() {
        let mut a = WashSim::seeded(2024);
        let mut b = WashSim::seeded(2024);
        for minutes in [30, 60, 120, 480] {
            assert_eq!(a.run(minutes), b.run(minutes));
        }
    }

    #[test]
    fn default_model_respects_invariants() {
        let mut sim = WashSim::seeded(7);
        let r = sim.run(43_200);
        assert_eq!(r.duration, 43_200);
        assert!(r.total_cars > 0);
        assert!(r.average_wait <= r.longest_wait as f64);
    }

    /// Observer that records every hook.
    #[derive(Default)]
    struct Recorder {
        arrivals: u32,
        waits:    Vec<u64>,
        minutes:  Vec<(Minute, usize)>,
        ends:     Vec<SimulationResult>,
    }

    impl WashObserver for Recorder {
        fn on_arrival(&mut self, _m: Minute, count: u32) { self.arrivals += count; }
        fn on_service(&mut self, _m: Minute, wait: u64) { self.waits.push(wait); }
        fn on_minute_end(&mut self, m: Minute, q: usize) { self.minutes.push((m, q)); }
        fn on_run_end(&mut self, r: &SimulationResult) { self.ends.push(*r); }
    }

    #[test]
    fn observer_sees_every_minute_until_drained() {
        let mut obs = Recorder::default();
        let r = fixed_sim(2).run_observed(3, &mut obs);

        assert_eq!(obs.arrivals, 6);
        assert_eq!(obs.waits, vec![0, 1, 1, 2, 2, 3]);
        let queue_lens: Vec<usize> = obs.minutes.iter().map(|&(_, q)| q).collect();
        assert_eq!(queue_lens, vec![1, 2, 3, 2, 1, 0]);
        assert_eq!(obs.minutes.last().map(|&(m, _)| m), Some(Minute(5)));
        assert_eq!(obs.ends, vec![r]);
    }
}

// ── Sweep schedule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use crate::{Sweep, SweepState};

    fn schedule(max: u64) -> Vec<u64> {
        Sweep::new(max).collect()
    }

    #[test]
    fn below_base_runs_once() {
        assert_eq!(schedule(20), vec![20]);
        assert_eq!(schedule(1), vec![1]);
        assert_eq!(schedule(29), vec![29]);
        assert_eq!(schedule(0), vec![0]);
    }

    #[test]
    fn exactly_base_runs_once() {
        assert_eq!(schedule(30), vec![30]);
    }

    #[test]
    fn closing_run_appended_when_short() {
        assert_eq!(schedule(100), vec![30, 60, 100]);
        assert_eq!(schedule(59), vec![30, 59]);
        assert_eq!(schedule(61), vec![30, 60, 61]);
    }

    #[test]
    fn no_closing_run_on_exact_power_step() {
        assert_eq!(schedule(60), vec![30, 60]);
        assert_eq!(schedule(240), vec![30, 60, 120, 240]);
    }

    #[test]
    fn default_bound_schedule() {
        assert_eq!(
            schedule(43_200),
            vec![30, 60, 120, 240, 480, 960, 1920, 3840, 7680, 15360, 30720, 43200]
        );
    }

    #[test]
    fn state_transitions_for_100() {
        let mut s = Sweep::new(100);
        assert_eq!(s.state(), SweepState::Seeding);
        assert_eq!(s.step(), None);
        assert_eq!(s.state(), SweepState::Doubling(30));
        assert_eq!(s.step(), Some(30));
        assert_eq!(s.state(), SweepState::Doubling(60));
        assert_eq!(s.step(), Some(60));
        assert_eq!(s.state(), SweepState::Closing);
        assert_eq!(s.step(), Some(100));
        assert_eq!(s.state(), SweepState::Done);
        assert_eq!(s.step(), None);
        assert_eq!(s.state(), SweepState::Done);
    }

    #[test]
    fn closing_emits_nothing_when_last_equals_max() {
        let mut s = Sweep::new(30);
        assert_eq!(s.step(), None);
        assert_eq!(s.step(), Some(30));
        assert_eq!(s.state(), SweepState::Closing);
        assert_eq!(s.step(), None);
        assert_eq!(s.state(), SweepState::Done);
    }

    #[test]
    fn short_request_skips_doubling() {
        let mut s = Sweep::new(10);
        assert_eq!(s.step(), Some(10));
        assert_eq!(s.state(), SweepState::Done);
        assert_eq!(s.max_minutes(), 10);
    }
}

// ── run_all ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_all {
    use super::*;

    #[test]
    fn durations_follow_schedule() {
        let mut sim = WashSim::seeded(3);
        assert_eq!(durations(&sim.run_all(100)), vec![30, 60, 100]);
        assert_eq!(durations(&sim.run_all(20)), vec![20]);
        assert_eq!(durations(&sim.run_all(30)), vec![30]);
    }

    #[test]
    fn sweep_continues_one_stream() {
        let mut swept = WashSim::seeded(11);
        let results = swept.run_all(100);

        let mut manual = WashSim::seeded(11);
        let expected: Vec<SimulationResult> = [30, 60, 100].iter().map(|&d| manual.run(d)).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn sweep_is_reproducible_with_seed() {
        let a = WashSim::seeded(42).run_all(2_000);
        let b = WashSim::seeded(42).run_all(2_000);
        assert_eq!(a, b);
    }

    #[test]
    fn observer_forwarded_to_every_run() {
        struct Ends(Vec<u64>);
        impl WashObserver for Ends {
            fn on_run_end(&mut self, r: &SimulationResult) { self.0.push(r.duration); }
        }
        let mut obs = Ends(Vec::new());
        fixed_sim(1).run_all_observed(250, &mut obs);
        assert_eq!(obs.0, vec![30, 60, 120, 240, 250]);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{Sweep, WashSim};

    proptest! {
        #[test]
        fn result_invariants(seed in any::<u64>(), minutes in 0u64..2_000) {
            let r = WashSim::seeded(seed).run(minutes);
            prop_assert_eq!(r.duration, minutes);
            prop_assert!(r.average_wait >= 0.0);
            if r.total_cars == 0 {
                prop_assert_eq!(r.longest_wait, 0);
                prop_assert_eq!(r.average_wait, 0.0);
            } else {
                prop_assert!(r.average_wait <= r.longest_wait as f64);
            }
            // At most two arrivals per open minute.
            prop_assert!(r.total_cars <= 2 * minutes);
        }

        #[test]
        fn sweep_schedule_shape(max in 1u64..1_000_000) {
            let s: Vec<u64> = Sweep::new(max).collect();
            prop_assert!(!s.is_empty());
            prop_assert_eq!(*s.last().unwrap(), max);
            prop_assert!(s.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(s.iter().all(|&d| d <= max));
            if max >= 30 {
                prop_assert_eq!(s[0], 30);
            } else {
                prop_assert_eq!(s.len(), 1);
            }
        }
    }
}
