//! Time horizon and window sampling.
//!
//! Timestamps are nanosecond-precision Unix epoch values (`i64`), the
//! same convention the rest of the ecosystem this feeds uses on the
//! wire. Rendered boundaries are RFC3339 UTC with second precision;
//! that exact string form is consumed verbatim by downstream query
//! text and must not change.

use crate::error::{GenerateError, Result};
use crate::sampler::Sampler;
use chrono::{DateTime, SecondsFormat};
use std::time::Duration;

/// Nanosecond-precision Unix epoch timestamp.
pub type Timestamp = i64;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: Timestamp,
    end: Timestamp,
}

impl TimeInterval {
    /// Creates an interval. `start` must be strictly before `end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if start >= end {
            return Err(GenerateError::InvalidInterval);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Length of the interval in nanoseconds.
    pub fn duration_nanos(&self) -> i64 {
        self.end - self.start
    }

    /// Renders the start boundary, e.g. `1970-01-01T00:05:58Z`.
    pub fn start_string(&self) -> String {
        render_timestamp(self.start)
    }

    /// Renders the end boundary.
    pub fn end_string(&self) -> String {
        render_timestamp(self.end)
    }

    /// Samples a sub-interval of exactly `window` length, uniformly
    /// placed within this interval.
    ///
    /// Consumes exactly one draw from the sampler. The offset is drawn
    /// from the inclusive range `[0, len - window]`, so a window equal
    /// to the whole interval is valid and yields the interval itself.
    pub fn rand_window(&self, window: Duration, sampler: &mut Sampler) -> Result<TimeInterval> {
        if window.is_zero() {
            return Err(GenerateError::EmptyWindow);
        }
        let window_ns = i64::try_from(window.as_nanos()).map_err(|_| {
            GenerateError::WindowExceedsInterval {
                window: window.as_secs(),
                interval: (self.duration_nanos() / NANOS_PER_SEC) as u64,
            }
        })?;
        if window_ns > self.duration_nanos() {
            return Err(GenerateError::WindowExceedsInterval {
                window: window.as_secs(),
                interval: (self.duration_nanos() / NANOS_PER_SEC) as u64,
            });
        }

        let slack = (self.duration_nanos() - window_ns) as u64;
        let offset = sampler.next_u64(slack + 1) as i64;
        let start = self.start + offset;
        Ok(TimeInterval {
            start,
            end: start + window_ns,
        })
    }
}

/// Renders a timestamp as RFC3339 UTC with second precision.
pub fn render_timestamp(ts: Timestamp) -> String {
    DateTime::from_timestamp_nanos(ts).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Formats a duration the way benchmark labels expect: `1s`, `1m0s`,
/// `8h0m0s`. Only whole seconds appear in labels.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{m}m{s}s")
    } else {
        format!("{s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_interval_requires_start_before_end() {
        let err = TimeInterval::new(10, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot create interval: start is not before end"
        );
        assert!(TimeInterval::new(10, 5).is_err());
        assert!(TimeInterval::new(0, 1).is_ok());
    }

    #[test]
    fn test_render_timestamp_epoch() {
        assert_eq!(render_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(render_timestamp(358 * 1_000_000_000), "1970-01-01T00:05:58Z");
    }

    #[test]
    fn test_rand_window_within_bounds() {
        let horizon = TimeInterval::new(0, 24 * 3600 * NANOS_PER_SEC).unwrap();
        let mut sampler = Sampler::new(123);
        for _ in 0..200 {
            let w = horizon.rand_window(HOUR, &mut sampler).unwrap();
            assert!(w.start() >= horizon.start());
            assert!(w.end() <= horizon.end());
            assert_eq!(w.duration_nanos(), 3600 * NANOS_PER_SEC);
        }
    }

    #[test]
    fn test_rand_window_full_horizon_is_exact() {
        let horizon = TimeInterval::new(0, 3600 * NANOS_PER_SEC).unwrap();
        let mut sampler = Sampler::new(5);
        let w = horizon.rand_window(HOUR, &mut sampler).unwrap();
        assert_eq!(w, horizon);
    }

    #[test]
    fn test_rand_window_too_long_fails() {
        let horizon = TimeInterval::new(0, 3600 * NANOS_PER_SEC).unwrap();
        let mut sampler = Sampler::new(5);
        let err = horizon
            .rand_window(Duration::from_secs(7200), &mut sampler)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "window of 7200s exceeds the interval of 3600s"
        );
    }

    #[test]
    fn test_rand_window_empty_fails() {
        let horizon = TimeInterval::new(0, 3600 * NANOS_PER_SEC).unwrap();
        let mut sampler = Sampler::new(5);
        let err = horizon.rand_window(Duration::ZERO, &mut sampler).unwrap_err();
        assert_eq!(err, GenerateError::EmptyWindow);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(1)), "1s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_duration(Duration::from_secs(12 * 3600)), "12h0m0s");
        assert_eq!(format_duration(Duration::from_secs(8 * 3600)), "8h0m0s");
    }
}
