//! Deterministic benchmark query workload generator for time-series
//! databases.
//!
//! Given a fixed simulated fleet of hosts and a time horizon, this
//! crate produces a reproducible stream of query descriptors covering
//! common analytical access patterns: range scans, grouped
//! aggregation, top-N, point-in-time lookup, and threshold filtering.
//!
//! All randomness flows through a single seeded [`sampler::Sampler`]
//! owned by the [`core::WorkloadCore`], so two runs constructed with
//! the same seed, scale, and horizon emit byte-identical descriptor
//! sequences.
//!
//! # Usage
//! ```bash
//! # 1000 grouped-aggregation queries over a 1000-host fleet
//! tsforge-generate --pattern group-by-time --queries 1000 --scale 1000
//!
//! # threshold-filter queries spanning all hosts
//! tsforge-generate --pattern high-usage --hosts 0
//! ```

pub mod config;
pub mod core;
pub mod devops;
pub mod error;
pub mod fleet;
pub mod interval;
pub mod kql;
pub mod sampler;
pub mod serialize;

pub use crate::config::{GeneratorConfig, PatternKind};
pub use crate::core::WorkloadCore;
pub use crate::error::{GenerateError, Result};
pub use crate::kql::{Devops, KqlEmitter, QueryEmitter};
