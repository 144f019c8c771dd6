//! Slider positions
//!
//! `Percent` is a position on the timeline slider, always within `[0, 100]`.
//! `RangeSelection` pairs a fixed start with the user-adjustable end.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{RangeError, RangeResult};

/// A percentage of the full timeline span, clamped to `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);
    pub const FULL: Percent = Percent(100.0);

    /// Clamp a raw value into range
    ///
    /// Out-of-range numbers snap to the nearest bound; NaN and infinities
    /// are rejected.
    pub fn clamped(value: f64) -> RangeResult<Self> {
        if !value.is_finite() {
            return Err(RangeError::NotFinite(value));
        }

        // `+ 0.0` turns -0.0 into 0.0
        let clamped = value.clamp(0.0, 100.0) + 0.0;
        if clamped != value {
            tracing::debug!(requested = value, clamped, "Range percent clamped");
        }

        Ok(Self(clamped))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Position as a fraction of the span, `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<f64> for Percent {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::clamped(value)
    }
}

impl From<Percent> for f64 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl FromStr for Percent {
    type Err = RangeError;

    /// Parse slider input such as `"42"`, `"42.5"` or `"42%"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

        let value: f64 = number
            .parse()
            .map_err(|_| RangeError::NotANumber(s.to_string()))?;

        Self::clamped(value)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Portion of the timeline on display
///
/// The start is pinned at 0; only the end follows the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSelection {
    start: Percent,
    end: Percent,
}

impl RangeSelection {
    /// The whole timeline
    pub fn full() -> Self {
        Self::up_to(Percent::FULL)
    }

    /// From the first record up to `end`
    pub fn up_to(end: Percent) -> Self {
        Self {
            start: Percent::ZERO,
            end,
        }
    }

    /// Same selection with a new end point
    pub fn with_end(self, end: Percent) -> Self {
        Self { end, ..self }
    }

    pub fn start(&self) -> Percent {
        self.start
    }

    pub fn end(&self) -> Percent {
        self.end
    }
}

impl Default for RangeSelection {
    fn default() -> Self {
        Self::full()
    }
}
