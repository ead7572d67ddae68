//! Simulated host fleet and distinct-host sampling.

use crate::error::{GenerateError, Result};
use crate::sampler::Sampler;
use std::collections::HashSet;

/// A fixed fleet of simulated hosts, deterministically named by pool
/// index: `host_0 .. host_{scale-1}`.
#[derive(Debug, Clone)]
pub struct HostPool {
    scale: usize,
}

impl HostPool {
    /// Creates a pool of `scale` hosts. `scale` must be at least 1.
    pub fn new(scale: usize) -> Result<Self> {
        if scale < 1 {
            return Err(GenerateError::InvalidScale(scale));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns the deterministic name of the host at `index`.
    pub fn hostname(&self, index: usize) -> String {
        format!("host_{index}")
    }

    /// Samples `n` distinct hosts without replacement, preserving the
    /// order in which they were first drawn. Draw order feeds rendered
    /// clause order, so it must stay stable.
    ///
    /// Consumes one sampler draw per attempt; duplicate indices are
    /// discarded and redrawn.
    pub fn sample_distinct(&self, n: i64, sampler: &mut Sampler) -> Result<Vec<String>> {
        if n < 1 {
            return Err(GenerateError::TooFewHosts(n));
        }
        let n = n as usize;
        if n > self.scale {
            return Err(GenerateError::TooManyHosts {
                requested: n,
                scale: self.scale,
            });
        }

        let mut seen = HashSet::with_capacity(n);
        let mut hosts = Vec::with_capacity(n);
        while hosts.len() < n {
            let index = sampler.next_u64(self.scale as u64) as usize;
            if seen.insert(index) {
                hosts.push(self.hostname(index));
            }
        }
        Ok(hosts)
    }
}
