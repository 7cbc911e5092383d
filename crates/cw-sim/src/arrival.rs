//! Per-minute arrival models.

use cw_core::{Minute, SimRng};

/// Decides how many cars join the queue in one open minute.
///
/// Called once per minute while the wash is open, never after closing.
/// Implementations must draw only from `rng` so that a seeded engine stays
/// reproducible.
pub trait ArrivalModel {
    fn arrivals(&mut self, minute: Minute, rng: &mut SimRng) -> u32;
}

/// The fixed arrival distribution: one uniform draw from `{0, 1, 2, 3}`.
///
/// | Draw  | Cars | Probability |
/// |-------|------|-------------|
/// | 0, 1  | 0    | 1/2         |
/// | 2     | 1    | 1/4         |
/// | 3     | 2    | 1/4         |
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformArrivals;

impl UniformArrivals {
    /// Map a raw draw to a car count.  Draws outside `0..=3` never happen.
    #[inline]
    pub fn cars_for_draw(draw: u8) -> u32 {
        match draw {
            2 => 1,
            3 => 2,
            _ => 0,
        }
    }
}

impl ArrivalModel for UniformArrivals {
    fn arrivals(&mut self, _minute: Minute, rng: &mut SimRng) -> u32 {
        Self::cars_for_draw(rng.gen_range(0..=3u8))
    }
}
