//! Fluent builder for constructing a [`WashSim`].

use cw_core::SimRng;

use crate::{ArrivalModel, UniformArrivals, WashSim};

/// Fluent builder for [`WashSim<A>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                               |
/// |------------------|---------------------------------------|
/// | `.seed(s)`       | Seeded from OS entropy                |
/// | `.arrivals(m)`   | [`UniformArrivals`]                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = WashSimBuilder::new().seed(42).build();
/// let results = sim.run_all(43_200);
/// ```
pub struct WashSimBuilder<A: ArrivalModel = UniformArrivals> {
    seed:     Option<u64>,
    arrivals: A,
}

impl WashSimBuilder<UniformArrivals> {
    pub fn new() -> Self {
        Self {
            seed:     None,
            arrivals: UniformArrivals,
        }
    }
}

impl Default for WashSimBuilder<UniformArrivals> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ArrivalModel> WashSimBuilder<A> {
    /// Fix the RNG seed so runs are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same as [`seed`][Self::seed] but accepts the optional seed carried by
    /// a `SweepConfig`.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the arrival model.
    pub fn arrivals<M: ArrivalModel>(self, arrivals: M) -> WashSimBuilder<M> {
        WashSimBuilder {
            seed: self.seed,
            arrivals,
        }
    }

    pub fn build(self) -> WashSim<A> {
        let rng = match self.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        };
        WashSim::new(rng, self.arrivals)
    }
}
