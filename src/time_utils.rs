use std::fmt;
use anyhow::{Result, anyhow, Context};
use once_cell::sync::Lazy;
use regex::Regex;

// @module: Timestamp parsing, formatting and arithmetic

// @const: Transcript timestamp regex, [[h:]m:]s[.ms]
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+):)?(?:(\d+):)?(\d+)(?:\.(\d+))?$").unwrap()
});

/// A non-negative duration since the start of the video, millisecond resolution.
///
/// Stored canonically as total milliseconds. Parses the marker forms
/// `s[.ms]`, `m:s[.ms]` and `h:m:s[.ms]`; formats to the SBV form
/// `h:mm:ss.mmm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TimeValue(u64);

impl TimeValue {
    /// Create a time value from a raw millisecond count - used by tests and external consumers
    #[allow(dead_code)]
    pub fn from_millis(ms: u64) -> Self {
        TimeValue(ms)
    }

    /// Total milliseconds since video start - used by tests and external consumers
    #[allow(dead_code)]
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Parse a textual timestamp in one of the accepted forms.
    ///
    /// Units left of the smallest given one default to 0, so `12.25`,
    /// `3:5.25` and `01:3:5.25` are all valid. The fractional part is
    /// right-padded or truncated to exactly 3 digits.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = TIMESTAMP_REGEX.captures(text.trim())
            .ok_or_else(|| anyhow!("Invalid timestamp format: {}", text))?;

        let field = |idx: usize| -> Result<u64> {
            caps.get(idx)
                .map_or(Ok(0), |m| m.as_str().parse()
                    .with_context(|| format!("Timestamp component out of range: {}", m.as_str())))
        };

        // With only two fields given the leading one is minutes, not hours
        let (hours, minutes) = match (caps.get(1), caps.get(2)) {
            (Some(_), Some(_)) => (field(1)?, field(2)?),
            (Some(_), None) => (0, field(1)?),
            _ => (0, 0),
        };
        let seconds = field(3)?;
        let millis = match caps.get(4) {
            Some(frac) => {
                let padded = format!("{:0<3}", frac.as_str());
                padded[..3].parse::<u64>()
                    .with_context(|| format!("Invalid fractional seconds: {}", frac.as_str()))?
            }
            None => 0,
        };

        // The grammar allows arbitrarily many digits per component, so the
        // weighted sum must be checked rather than allowed to wrap
        let total = hours.checked_mul(3_600_000)
            .zip(minutes.checked_mul(60_000))
            .zip(seconds.checked_mul(1_000))
            .and_then(|((h, m), s)| h.checked_add(m)?.checked_add(s)?.checked_add(millis))
            .ok_or_else(|| anyhow!("Timestamp component out of range: {}", text.trim()))?;

        Ok(TimeValue(total))
    }

    /// Format to the SBV-required `h:mm:ss.mmm` form.
    ///
    /// Hours carry no padding; minutes and seconds are always 2 digits,
    /// milliseconds always 3.
    pub fn format(&self) -> String {
        let hours = self.0 / 3_600_000;
        let minutes = (self.0 % 3_600_000) / 60_000;
        let seconds = (self.0 % 60_000) / 1_000;
        let millis = self.0 % 1_000;

        format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }

    /// Apply a signed millisecond offset, clamping the result at 0.
    ///
    /// A timestamp never goes negative: an offset that would underflow
    /// produces 0 instead. Widening to i128 keeps values above `i64::MAX`
    /// milliseconds exact instead of wrapping.
    pub fn offset_by(&self, delta_ms: i64) -> Self {
        let shifted = self.0 as i128 + delta_ms as i128;
        TimeValue(shifted.clamp(0, u64::MAX as i128) as u64)
    }

    /// Signed millisecond distance from `other` to `self`, saturating at the
    /// i64 bounds for distances the return type cannot hold
    pub fn delta_from(&self, other: TimeValue) -> i64 {
        let delta = self.0 as i128 - other.0 as i128;
        delta.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
