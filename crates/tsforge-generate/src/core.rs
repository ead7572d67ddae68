//! Reusable workload base shared by every query pattern.

use crate::error::Result;
use crate::fleet::HostPool;
use crate::interval::{TimeInterval, Timestamp};
use crate::sampler::Sampler;
use std::time::Duration;

/// Holds the generation horizon, the host pool, and the sampler.
///
/// One instance per generation run. The sampler carries mutable stream
/// position, so a core must not be shared across threads; parallel
/// generation means one independently seeded core per worker over a
/// disjoint slice of the output.
#[derive(Debug)]
pub struct WorkloadCore {
    interval: TimeInterval,
    hosts: HostPool,
    sampler: Sampler,
}

impl WorkloadCore {
    /// Creates a core over the horizon `[start, end)` with `scale`
    /// hosts and a seeded sampler.
    pub fn new(start: Timestamp, end: Timestamp, scale: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            interval: TimeInterval::new(start, end)?,
            hosts: HostPool::new(scale)?,
            sampler: Sampler::new(seed),
        })
    }

    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    pub fn scale(&self) -> usize {
        self.hosts.scale()
    }

    /// Samples one window of `window` length inside the horizon.
    pub fn rand_window(&mut self, window: Duration) -> Result<TimeInterval> {
        self.interval.rand_window(window, &mut self.sampler)
    }

    /// Samples `n` distinct hostnames in draw order.
    pub fn random_hosts(&mut self, n: i64) -> Result<Vec<String>> {
        self.hosts.sample_distinct(n, &mut self.sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: i64 = 1_000_000_000;

    #[test]
    fn test_core_validates_inputs() {
        assert!(WorkloadCore::new(0, 3600 * SEC, 10, 1).is_ok());
        assert!(WorkloadCore::new(0, 0, 10, 1).is_err());
        assert!(WorkloadCore::new(0, 3600 * SEC, 0, 1).is_err());
    }

    #[test]
    fn test_core_draws_are_reproducible() {
        let mut a = WorkloadCore::new(0, 86_400 * SEC, 100, 123).unwrap();
        let mut b = WorkloadCore::new(0, 86_400 * SEC, 100, 123).unwrap();

        for _ in 0..10 {
            let wa = a.rand_window(Duration::from_secs(3600)).unwrap();
            let wb = b.rand_window(Duration::from_secs(3600)).unwrap();
            assert_eq!(wa, wb);
            assert_eq!(a.random_hosts(5).unwrap(), b.random_hosts(5).unwrap());
        }
    }
}
