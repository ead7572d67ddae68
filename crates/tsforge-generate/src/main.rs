//! CLI entry point for the tsforge query workload generator.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tsforge_generate::{Devops, GeneratorConfig, PatternKind};

#[derive(Parser)]
#[command(name = "tsforge-generate")]
#[command(about = "Deterministic benchmark query generator for time-series databases")]
#[command(version)]
struct Cli {
    /// Sampler seed; identical seeds reproduce identical output
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Number of simulated hosts in the fleet
    #[arg(short, long, default_value = "1000")]
    scale: usize,

    /// Horizon start (RFC3339)
    #[arg(long, default_value = "1970-01-01T00:00:00Z")]
    timestamp_start: String,

    /// Horizon end (RFC3339, exclusive)
    #[arg(long, default_value = "1970-01-04T00:00:00Z")]
    timestamp_end: String,

    /// Number of query descriptors to generate
    #[arg(short, long, default_value = "1000")]
    queries: usize,

    /// Query pattern to generate
    #[arg(short, long, value_enum, default_value = "group-by-time")]
    pattern: PatternKind,

    /// Hosts per query (0 = unrestricted for high-usage)
    #[arg(long, default_value = "1")]
    hosts: i64,

    /// Metrics per query
    #[arg(long, default_value = "1")]
    metrics: usize,

    /// Window length in seconds for group-by-time
    #[arg(long, default_value = "3600")]
    window_secs: u64,

    /// Output file for the JSONL descriptor stream (stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn parse_rfc3339_nanos(value: &str) -> Result<i64> {
    let parsed = chrono::DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("invalid RFC3339 timestamp: {value}"))?;
    parsed
        .timestamp_nanos_opt()
        .with_context(|| format!("timestamp out of range: {value}"))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let config = GeneratorConfig {
        seed: cli.seed,
        scale: cli.scale,
        start: parse_rfc3339_nanos(&cli.timestamp_start)?,
        end: parse_rfc3339_nanos(&cli.timestamp_end)?,
        queries: cli.queries,
        pattern: cli.pattern,
        hosts: cli.hosts,
        metrics: cli.metrics,
        window_secs: cli.window_secs,
        output_file: cli.output,
    };

    info!(
        "Generating {} '{}' queries: seed={}, scale={}, horizon=[{}, {})",
        config.queries, config.pattern, config.seed, config.scale,
        cli.timestamp_start, cli.timestamp_end
    );

    let mut sink: BufWriter<Box<dyn Write>> = match &config.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {path}"))?;
            BufWriter::new(Box::new(file))
        }
        None => BufWriter::new(Box::new(std::io::stdout())),
    };

    let written = run(&config, &mut sink)?;

    // Flush before reporting so an I/O failure aborts the run loudly
    // instead of leaving a silently truncated workload behind.
    sink.flush().context("failed to flush output sink")?;

    info!("Generated {} query descriptors", written);
    Ok(())
}

fn run(config: &GeneratorConfig, sink: &mut impl Write) -> Result<usize> {
    let mut generator = Devops::new(config.start, config.end, config.scale, config.seed)
        .context("failed to construct workload")?;
    let window = Duration::from_secs(config.window_secs);

    for i in 0..config.queries {
        let mut query = generator.empty_query();
        match config.pattern {
            PatternKind::GroupByTime => {
                generator.group_by_time(&mut query, config.hosts, config.metrics, window)?
            }
            PatternKind::GroupByOrderByLimit => generator.group_by_order_by_limit(&mut query)?,
            PatternKind::DoubleGroupBy => {
                generator.group_by_time_and_tag(&mut query, config.metrics)?
            }
            PatternKind::MaxAll => generator.max_all_metrics(&mut query, config.hosts)?,
            PatternKind::LastPoint => generator.last_point_per_host(&mut query)?,
            PatternKind::HighUsage => generator.high_usage_for_hosts(&mut query, config.hosts)?,
        }

        let line = serde_json::to_string(&query)
            .with_context(|| format!("failed to encode descriptor {i}"))?;
        writeln!(sink, "{line}").context("failed to write descriptor")?;
    }

    Ok(config.queries)
}
