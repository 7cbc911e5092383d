//! Plain data row type written by report backends.

use cw_sim::SimulationResult;
use serde::Serialize;

/// One report line: the outcome of a single run in the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    pub time_minutes: u64,
    pub cars_washed:  u64,
    pub average_wait: f64,
    pub longest_wait: u64,
}

impl From<&SimulationResult> for ReportRow {
    fn from(r: &SimulationResult) -> Self {
        Self {
            time_minutes: r.duration,
            cars_washed:  r.total_cars,
            average_wait: r.average_wait,
            longest_wait: r.longest_wait,
        }
    }
}
