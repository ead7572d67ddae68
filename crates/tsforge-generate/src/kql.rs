//! KQL query patterns for the devops workload.
//!
//! Each pattern samples from the workload core in a fixed order
//! (window offset first, then host indices) and renders a complete
//! query text; the emitter then wraps the text into an HTTP request
//! descriptor. Rendered query bytes are a stable contract with the
//! backend, down to clause separators and spacing.

use crate::core::WorkloadCore;
use crate::devops;
use crate::error::Result;
use crate::interval::Timestamp;
use std::time::Duration;
use tsforge_query::HttpQuery;

/// Backend name used as the label prefix.
const LABEL_PREFIX: &str = "KQL";

/// Query endpoint path on the backend REST API.
const QUERY_PATH: &str = "/v2/rest/query";

/// Binds the logical `cpu` source to the deployment's table name.
const TABLE_BINDING: &str = "let cpu = CpuMetrics; ";

/// Fills an empty request descriptor with a rendered query.
///
/// Implementations set every payload field in one shot; the fill is
/// performed at most once per descriptor and the core never re-reads
/// the filled payload.
pub trait QueryEmitter {
    fn fill(&self, query: &mut HttpQuery, human_label: &str, human_description: &str, query_text: &str);
}

/// Emitter for the KQL-over-REST backend: GET request with the query
/// text URL-encoded into a single `csl` path parameter, empty body.
#[derive(Debug, Default, Clone, Copy)]
pub struct KqlEmitter;

impl QueryEmitter for KqlEmitter {
    fn fill(&self, query: &mut HttpQuery, human_label: &str, human_description: &str, query_text: &str) {
        debug_assert!(!query.is_filled(), "query descriptor filled twice");

        let bound = format!("{TABLE_BINDING}{query_text}");
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("csl", &bound)
            .finish();

        query.human_label = human_label.to_string();
        query.human_description = human_description.to_string();
        query.method = "GET".to_string();
        query.path = format!("{QUERY_PATH}?{encoded}");
        query.body = None;
    }
}

/// Produces KQL queries for all the devops query patterns.
#[derive(Debug)]
pub struct Devops {
    core: WorkloadCore,
    emitter: KqlEmitter,
}

impl Devops {
    /// Creates a pattern generator over the horizon `[start, end)`
    /// with `scale` hosts and a seeded sampler.
    pub fn new(start: Timestamp, end: Timestamp, scale: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            core: WorkloadCore::new(start, end, scale, seed)?,
            emitter: KqlEmitter,
        })
    }

    /// Returns an empty descriptor ready to be filled by a pattern.
    pub fn empty_query(&self) -> HttpQuery {
        HttpQuery::new_empty()
    }

    /// Renders a host membership predicate from explicit hostnames.
    fn host_clause(hostnames: &[String]) -> String {
        let quoted: Vec<String> = hostnames.iter().map(|h| format!("'{h}'")).collect();
        format!("hostname in ({})", quoted.join(", "))
    }

    /// Samples `n_hosts` hosts and renders their membership predicate.
    fn random_host_clause(&mut self, n_hosts: i64) -> Result<String> {
        let hostnames = self.core.random_hosts(n_hosts)?;
        Ok(Self::host_clause(&hostnames))
    }

    /// Renders one `agg(metric)` clause per metric.
    fn agg_clauses(agg: &str, metrics: &[&str]) -> Vec<String> {
        metrics.iter().map(|m| format!("{agg}({m})")).collect()
    }

    /// Grouped-time-aggregation: per-minute MAX of the first
    /// `n_metrics` catalogue metrics over `n_hosts` sampled hosts and
    /// one sampled window, ascending by time bucket.
    ///
    /// Draw order: window, then hosts.
    pub fn group_by_time(
        &mut self,
        query: &mut HttpQuery,
        n_hosts: i64,
        n_metrics: usize,
        window: Duration,
    ) -> Result<()> {
        let interval = self.core.rand_window(window)?;
        let metrics = devops::cpu_metrics_slice(n_metrics)?;
        let selects = Self::agg_clauses("max", metrics);
        let where_hosts = self.random_host_clause(n_hosts)?;

        let label = devops::group_by_time_label(LABEL_PREFIX, n_metrics, n_hosts, window);
        let desc = format!("{label}: {}", interval.start_string());
        let kql = format!(
            "cpu | where {where_hosts} and timestamp >= datetime('{}') and timestamp < datetime('{}') | summarize {} by bin(timestamp, 1m) | order by timestamp asc",
            interval.start_string(),
            interval.end_string(),
            selects.join(", ")
        );
        self.emitter.fill(query, &label, &desc, &kql);
        Ok(())
    }

    /// Bounded-top-N: per-minute MAX of `usage_user` over all hosts
    /// before a sampled hour's end, top 5 buckets descending.
    pub fn group_by_order_by_limit(&mut self, query: &mut HttpQuery) -> Result<()> {
        let interval = self.core.rand_window(Duration::from_secs(3600))?;

        let label = format!("{LABEL_PREFIX} max cpu over last 5 min-intervals (random end)");
        let desc = format!("{label}: {}", interval.start_string());
        let kql = format!(
            "cpu | where timestamp < datetime('{}') | summarize max(usage_user) by bin(timestamp, 1m) | top 5 by timestamp desc",
            interval.end_string()
        );
        self.emitter.fill(query, &label, &desc, &kql);
        Ok(())
    }

    /// Grouped-time-and-tag: per-hour AVG of the first `n_metrics`
    /// catalogue metrics over a sampled 12h window, grouped by time
    /// bucket and hostname, all hosts, ascending.
    ///
    /// Draw order: metrics take no draw; window only.
    pub fn group_by_time_and_tag(&mut self, query: &mut HttpQuery, n_metrics: usize) -> Result<()> {
        let metrics = devops::cpu_metrics_slice(n_metrics)?;
        let interval = self.core.rand_window(devops::DOUBLE_GROUP_BY_WINDOW)?;
        let selects = Self::agg_clauses("avg", metrics);

        let label = devops::double_group_by_label(LABEL_PREFIX, n_metrics);
        let desc = format!("{label}: {}", interval.start_string());
        let kql = format!(
            "cpu | where timestamp >= datetime('{}') and timestamp < datetime('{}') | summarize {} by bin(timestamp, 1h), hostname | order by timestamp",
            interval.start_string(),
            interval.end_string(),
            selects.join(", ")
        );
        self.emitter.fill(query, &label, &desc, &kql);
        Ok(())
    }

    /// All-metrics-max: per-hour MAX of the entire catalogue over
    /// `n_hosts` sampled hosts and a sampled 8h window, ascending.
    ///
    /// Draw order: window, then hosts. Select clauses join with a bare
    /// comma here; golden outputs depend on the difference.
    pub fn max_all_metrics(&mut self, query: &mut HttpQuery, n_hosts: i64) -> Result<()> {
        let interval = self.core.rand_window(devops::MAX_ALL_WINDOW)?;
        let where_hosts = self.random_host_clause(n_hosts)?;
        let selects = Self::agg_clauses("max", devops::all_cpu_metrics());

        let label = devops::max_all_label(LABEL_PREFIX, n_hosts);
        let desc = format!("{label}: {}", interval.start_string());
        let kql = format!(
            "cpu | where {where_hosts} and timestamp >= datetime('{}') and timestamp < datetime('{}') | summarize {} by bin(timestamp, 1h) | order by timestamp",
            interval.start_string(),
            interval.end_string(),
            selects.join(",")
        );
        self.emitter.fill(query, &label, &desc, &kql);
        Ok(())
    }

    /// Last-point-per-entity: latest row for every host, no sampling
    /// and no time filter. Output is identical regardless of seed or
    /// horizon.
    pub fn last_point_per_host(&mut self, query: &mut HttpQuery) -> Result<()> {
        let label = format!("{LABEL_PREFIX} last row per host");
        let desc = format!("{label}: cpu");
        let kql = "cpu | summarize arg_max(timestamp, *) by hostname";
        self.emitter.fill(query, &label, &desc, kql);
        Ok(())
    }

    /// Threshold-filter: rows where `usage_user > 90.0` within a
    /// sampled 12h window, optionally restricted to `n_hosts` sampled
    /// hosts. A count of 0 omits the host predicate entirely.
    ///
    /// Draw order: window, then hosts (only when `n_hosts > 0`).
    pub fn high_usage_for_hosts(&mut self, query: &mut HttpQuery, n_hosts: i64) -> Result<()> {
        let label = devops::high_usage_label(LABEL_PREFIX, n_hosts)?;
        let interval = self.core.rand_window(devops::HIGH_USAGE_WINDOW)?;

        let host_clause = if n_hosts == 0 {
            String::new()
        } else {
            format!("and {}", self.random_host_clause(n_hosts)?)
        };

        let desc = format!("{label}: {}", interval.start_string());
        let kql = format!(
            "cpu | where usage_user > 90.0 {host_clause} and timestamp >= datetime('{}') and timestamp < datetime('{}')",
            interval.start_string(),
            interval.end_string()
        );
        self.emitter.fill(query, &label, &desc, &kql);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_clause_rendering() {
        let cases = [
            (vec!["foo1"], "hostname in ('foo1')"),
            (vec!["foo1", "foo2"], "hostname in ('foo1', 'foo2')"),
            (vec!["foo1", "foo2", "foo3"], "hostname in ('foo1', 'foo2', 'foo3')"),
        ];
        for (hosts, want) in cases {
            let hosts: Vec<String> = hosts.into_iter().map(String::from).collect();
            assert_eq!(Devops::host_clause(&hosts), want);
        }
    }

    #[test]
    fn test_host_clause_round_trip() {
        for hosts in [
            vec!["host_3".to_string()],
            vec!["host_7".to_string(), "host_1".to_string()],
            vec!["host_2".to_string(), "host_9".to_string(), "host_4".to_string()],
        ] {
            let clause = Devops::host_clause(&hosts);
            let inner = clause
                .strip_prefix("hostname in (")
                .and_then(|s| s.strip_suffix(')'))
                .unwrap();
            let parsed: Vec<String> = inner
                .split(", ")
                .map(|h| h.trim_matches('\'').to_string())
                .collect();
            assert_eq!(parsed, hosts);
        }
    }

    #[test]
    fn test_agg_clauses() {
        assert_eq!(Devops::agg_clauses("max", &["foo"]).join(","), "max(foo)");
        assert_eq!(
            Devops::agg_clauses("max", &["foo", "bar"]).join(","),
            "max(foo),max(bar)"
        );
        assert_eq!(
            Devops::agg_clauses("avg", &["foo", "bar"]).join(", "),
            "avg(foo), avg(bar)"
        );
    }

    #[test]
    fn test_fill_sets_every_payload_field() {
        let emitter = KqlEmitter;
        let mut q = HttpQuery::new_empty();
        emitter.fill(&mut q, "my label", "my description", "cpu | take 1");

        assert_eq!(q.human_label, "my label");
        assert_eq!(q.human_description, "my description");
        assert_eq!(q.method, "GET");
        assert!(q.body.is_none());

        let qs = q.path.strip_prefix("/v2/rest/query?").unwrap();
        let params: Vec<(String, String)> = url::form_urlencoded::parse(qs.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            params,
            vec![("csl".to_string(), "let cpu = CpuMetrics; cpu | take 1".to_string())]
        );
    }
}
