//! Per-run output record and the wait accumulator that produces it.

/// Statistics for one completed engine run.
///
/// Built only by [`WaitStats::finish`]; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Minutes the wash was open (the requested duration, not the minute the
    /// queue finally drained).
    pub duration:     u64,
    /// Cars washed, including those served after closing.
    pub total_cars:   u64,
    /// Longest wait of any single car, in minutes.
    pub longest_wait: u64,
    /// Mean wait in minutes; `0.0` when no car was washed.
    pub average_wait: f64,
}

/// Running totals for the service phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaitStats {
    pub cars:         u64,
    pub total_wait:   u64,
    pub longest_wait: u64,
}

impl WaitStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one washed car that waited `wait` minutes.
    #[inline]
    pub fn record(&mut self, wait: u64) {
        self.cars += 1;
        self.total_wait += wait;
        self.longest_wait = self.longest_wait.max(wait);
    }

    /// Mean wait, or `0.0` before any car is recorded.
    pub fn average(&self) -> f64 {
        if self.cars == 0 {
            0.0
        } else {
            self.total_wait as f64 / self.cars as f64
        }
    }

    pub fn finish(self, duration: u64) -> SimulationResult {
        SimulationResult {
            duration,
            total_cars:   self.cars,
            longest_wait: self.longest_wait,
            average_wait: self.average(),
        }
    }
}
