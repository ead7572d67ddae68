//! Error types for the workload generator.
//!
//! Message texts are part of the observable contract: downstream test
//! suites assert on them verbatim, so they must stay stable.

use thiserror::Error;

/// Generator error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("cannot create interval: start is not before end")]
    InvalidInterval,

    #[error("cannot sample an empty window")]
    EmptyWindow,

    #[error("window of {window}s exceeds the interval of {interval}s")]
    WindowExceedsInterval { window: u64, interval: u64 },

    #[error("scale must be at least 1; got {0}")]
    InvalidScale(usize),

    #[error("number of hosts cannot be < 1; got {0}")]
    TooFewHosts(i64),

    #[error("number of hosts ({requested}) larger than total hosts. See --scale ({scale})")]
    TooManyHosts { requested: usize, scale: usize },

    #[error("cannot get 0 metrics")]
    ZeroMetrics,

    #[error("too many metrics asked for")]
    TooManyMetrics,
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
