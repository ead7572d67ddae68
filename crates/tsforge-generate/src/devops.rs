//! Devops metric catalogue and shared label builders.
//!
//! The catalogue order is canonical: patterns that take an `n_metrics`
//! parameter always select the first `n` entries, never a random
//! subset. Labels use fixed-width host counts so two runs diff
//! cleanly line by line.

use crate::error::{GenerateError, Result};
use crate::interval::format_duration;
use std::time::Duration;

/// CPU metrics in canonical catalogue order.
pub const CPU_METRICS: [&str; 10] = [
    "usage_user",
    "usage_system",
    "usage_idle",
    "usage_nice",
    "usage_iowait",
    "usage_irq",
    "usage_softirq",
    "usage_steal",
    "usage_guest",
    "usage_guest_nice",
];

/// Window length for the double-group-by pattern.
pub const DOUBLE_GROUP_BY_WINDOW: Duration = Duration::from_secs(12 * 3600);

/// Window length for the max-all-metrics pattern.
pub const MAX_ALL_WINDOW: Duration = Duration::from_secs(8 * 3600);

/// Window length for the threshold-filter pattern.
pub const HIGH_USAGE_WINDOW: Duration = Duration::from_secs(12 * 3600);

/// Returns the first `n` metrics of the canonical catalogue.
pub fn cpu_metrics_slice(n: usize) -> Result<&'static [&'static str]> {
    if n < 1 {
        return Err(GenerateError::ZeroMetrics);
    }
    if n > CPU_METRICS.len() {
        return Err(GenerateError::TooManyMetrics);
    }
    Ok(&CPU_METRICS[..n])
}

/// Returns the entire canonical catalogue.
pub fn all_cpu_metrics() -> &'static [&'static str] {
    &CPU_METRICS
}

/// Label for the grouped-time-aggregation pattern.
pub fn group_by_time_label(
    backend: &str,
    n_metrics: usize,
    n_hosts: i64,
    window: Duration,
) -> String {
    format!(
        "{backend} {n_metrics} cpu metric(s), random {n_hosts:4} hosts, random {} by 1m",
        format_duration(window)
    )
}

/// Label for the grouped-time-and-tag pattern.
pub fn double_group_by_label(backend: &str, n_metrics: usize) -> String {
    format!(
        "{backend} mean of {n_metrics} metrics, all hosts, random {} by 1h",
        format_duration(DOUBLE_GROUP_BY_WINDOW)
    )
}

/// Label for the all-metrics-max pattern.
pub fn max_all_label(backend: &str, n_hosts: i64) -> String {
    format!(
        "{backend} max of all CPU metrics, random {n_hosts:4} hosts, random {} by 1h",
        format_duration(MAX_ALL_WINDOW)
    )
}

/// Label for the threshold-filter pattern. A host count of 0 means the
/// filter spans all hosts; negative counts are a contract violation.
pub fn high_usage_label(backend: &str, n_hosts: i64) -> Result<String> {
    if n_hosts < 0 {
        return Err(GenerateError::TooFewHosts(n_hosts));
    }
    Ok(if n_hosts == 0 {
        format!("{backend} CPU over threshold, all hosts")
    } else {
        format!("{backend} CPU over threshold, {n_hosts} host(s)")
    })
}
