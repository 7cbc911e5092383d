//! Sweep configuration and CLI-boundary duration parsing.
//!
//! The engine and sweep driver only ever see validated values.  Anything the
//! user types for `-m` is resolved here, silently falling back to
//! [`DEFAULT_MAX_MINUTES`] when it cannot be used.

/// Sweep upper bound used when `-m` is absent or unusable (30 days).
pub const DEFAULT_MAX_MINUTES: u64 = 43_200;

/// First duration of the doubling schedule.  Shorter requests are run once.
pub const SWEEP_BASE_MINUTES: u64 = 30;

/// Top-level run configuration, assembled by the binary from its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Upper bound of the duration sweep, always `>= 1`.
    pub max_minutes: u64,

    /// Fixed RNG seed.  `None` seeds from OS entropy, so every process
    /// produces a different report.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_minutes: DEFAULT_MAX_MINUTES,
            seed:        None,
        }
    }
}

impl SweepConfig {
    /// Build a config from an already-resolved bound (`None` means the
    /// default) and an optional seed.
    pub fn new(max_minutes: Option<u64>, seed: Option<u64>) -> Self {
        Self {
            max_minutes: max_minutes.unwrap_or(DEFAULT_MAX_MINUTES),
            seed,
        }
    }

    /// Resolve a `-m` value to a positive minute count.
    ///
    /// Accepts what C `stoi` accepts: leading whitespace, an optional sign,
    /// then decimal digits, ignoring whatever follows them.  No digits, a
    /// value outside `i32`, or a value `<= 0` yields [`DEFAULT_MAX_MINUTES`].
    pub fn max_minutes_from_arg(arg: &str) -> u64 {
        Self::try_max_minutes_from_arg(arg).unwrap_or(DEFAULT_MAX_MINUTES)
    }

    /// Like [`max_minutes_from_arg`][Self::max_minutes_from_arg], but
    /// returns `None` when `arg` holds no readable integer at all (no digits,
    /// or outside `i32`).  A readable but non-positive value still resolves
    /// to [`DEFAULT_MAX_MINUTES`].
    ///
    /// The CLI only consumes the token after `-m` when this is `Some`.
    pub fn try_max_minutes_from_arg(arg: &str) -> Option<u64> {
        leading_i32(arg).map(|n| if n > 0 { n as u64 } else { DEFAULT_MAX_MINUTES })
    }
}

/// Parse the longest `[ws][+-]digits` prefix of `s` as an `i32`.
fn leading_i32(s: &str) -> Option<i32> {
    // C isspace also covers vertical tab, which Rust's ASCII set omits.
    let trimmed = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = &trimmed[sign_len..];
    let digit_len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse::<i32>().ok()
}
