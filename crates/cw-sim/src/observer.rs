//! Engine observer trait for progress reporting and tracing.

use cw_core::Minute;

use crate::SimulationResult;

/// Callbacks invoked by [`WashSim::run_observed`][crate::WashSim::run_observed]
/// at key points in the minute loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — run printer
///
/// ```rust,ignore
/// struct RunPrinter;
///
/// impl WashObserver for RunPrinter {
///     fn on_run_end(&mut self, result: &SimulationResult) {
///         println!("{} min: {} cars", result.duration, result.total_cars);
///     }
/// }
/// ```
pub trait WashObserver {
    /// Called after `count` cars (at least one) joined the queue at `minute`.
    fn on_arrival(&mut self, _minute: Minute, _count: u32) {}

    /// Called when a car starts its wash after waiting `wait` minutes.
    fn on_service(&mut self, _minute: Minute, _wait: u64) {}

    /// Called at the end of each minute with the cars still queued.
    fn on_minute_end(&mut self, _minute: Minute, _queue_len: usize) {}

    /// Called once per run, after the queue has drained.
    fn on_run_end(&mut self, _result: &SimulationResult) {}
}

/// A [`WashObserver`] that does nothing.
pub struct NoopObserver;

impl WashObserver for NoopObserver {}
