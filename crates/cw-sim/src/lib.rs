//! `cw-sim` — the car wash engine and the duration sweep.
//!
//! # One run
//!
//! ```text
//! t = 0
//! while t < minutes || queue not empty:
//!   ① Arrivals — only while open: ArrivalModel draws 0, 1 or 2 cars,
//!                each stamped with t and pushed to the back of the queue.
//!   ② Service  — pop the front car (if any); wait = t - arrival.
//!   t += 1
//! ```
//!
//! The queue always drains: cars already waiting at closing time are washed.
//!
//! # Sweep
//!
//! [`Sweep`] yields the durations 30, 60, 120, … up to `max_minutes`, plus
//! a closing run at exactly `max_minutes` when the doubling stopped short of
//! it.  [`WashSim::run_all`] runs the engine once per duration, continuing
//! the same random stream.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cw_sim::WashSim;
//!
//! let mut sim = WashSim::seeded(42);
//! for r in sim.run_all(100) {
//!     println!("{} min: {} cars", r.duration, r.total_cars);
//! }
//! ```

pub mod arrival;
pub mod builder;
pub mod engine;
pub mod observer;
pub mod result;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use arrival::{ArrivalModel, UniformArrivals};
pub use builder::WashSimBuilder;
pub use engine::WashSim;
pub use observer::{NoopObserver, WashObserver};
pub use result::{SimulationResult, WaitStats};
pub use sweep::{Sweep, SweepState};
