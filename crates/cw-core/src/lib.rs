//! `cw-core` — foundational types for the `carwash` queue simulator.
//!
//! This crate is a dependency of every other `cw-*` crate.  It has no `cw-*`
//! dependencies and a single external one (`rand`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`time`]    | `Minute`                                                  |
//! | [`rng`]     | `SimRng` (engine-owned random stream)                     |
//! | [`config`]  | `SweepConfig`, sweep constants, `-m` argument parsing     |

pub mod config;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_MAX_MINUTES, SWEEP_BASE_MINUTES, SweepConfig};
pub use rng::SimRng;
pub use time::Minute;
