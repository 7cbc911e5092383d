//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Minute` counter starting at 0 when
//! the wash opens.  One tick of the simulation is exactly one minute, and an
//! arrival is stamped with the minute it joined the queue, so a car's wait is
//! plain integer subtraction:
//!
//!   wait = service_minute - arrival_minute
//!
//! Integer minutes keep every wait exact; only the final average is a float.

use std::fmt;

// ── Minute ───────────────────────────────────────────────────────────────────

/// An absolute simulation minute, counted from opening time.
///
/// Stored as `u64`: a run drains its queue after closing, so the clock can
/// run past the requested duration and must not overflow for large inputs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// The minute immediately after `self`.
    #[inline]
    pub fn next(self) -> Minute {
        Minute(self.0 + 1)
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}
