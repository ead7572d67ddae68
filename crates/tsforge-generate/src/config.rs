//! Configuration structs for the workload generator.

use crate::interval::Timestamp;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Main configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Sampler seed. Two runs with the same seed, scale, and horizon
    /// produce byte-identical output.
    pub seed: u64,

    /// Number of simulated hosts in the fleet.
    pub scale: usize,

    /// Horizon start (nanosecond epoch).
    pub start: Timestamp,

    /// Horizon end (nanosecond epoch, exclusive).
    pub end: Timestamp,

    /// Number of query descriptors to generate.
    pub queries: usize,

    /// Which query pattern to generate.
    pub pattern: PatternKind,

    /// Hosts per query for patterns that sample hosts.
    pub hosts: i64,

    /// Metrics per query for patterns that take a metric count.
    pub metrics: usize,

    /// Window length in seconds for the grouped-time-aggregation
    /// pattern; other patterns use fixed windows.
    pub window_secs: u64,

    /// Output file for the descriptor stream (stdout when unset).
    pub output_file: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            scale: 1000,
            start: 0,
            end: 3 * 86_400 * 1_000_000_000,
            queries: 1000,
            pattern: PatternKind::GroupByTime,
            hosts: 1,
            metrics: 1,
            window_secs: 3600,
            output_file: None,
        }
    }
}

/// The fixed catalogue of query patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Per-minute MAX over sampled hosts and a sampled window.
    GroupByTime,
    /// Per-minute MAX over all hosts, top 5 buckets descending.
    GroupByOrderByLimit,
    /// Per-hour AVG grouped by time bucket and hostname.
    DoubleGroupBy,
    /// Per-hour MAX of every catalogue metric over sampled hosts.
    MaxAll,
    /// Latest row per host, no time filter.
    LastPoint,
    /// Threshold filter over a sampled window.
    HighUsage,
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternKind::GroupByTime => write!(f, "group-by-time"),
            PatternKind::GroupByOrderByLimit => write!(f, "group-by-order-by-limit"),
            PatternKind::DoubleGroupBy => write!(f, "double-group-by"),
            PatternKind::MaxAll => write!(f, "max-all"),
            PatternKind::LastPoint => write!(f, "last-point"),
            PatternKind::HighUsage => write!(f, "high-usage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_kind_display() {
        assert_eq!(PatternKind::GroupByTime.to_string(), "group-by-time");
        assert_eq!(PatternKind::LastPoint.to_string(), "last-point");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, config.seed);
        assert_eq!(back.scale, config.scale);
        assert_eq!(back.pattern, config.pattern);
    }
}
