use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Parser;
use servermon_core::{DisplaySettings, ServerReport};
use tracing::{debug, info, warn};

mod config;

/// servermon: normalize a raw host monitoring report into a snapshot.
#[derive(Parser, Debug)]
#[command(name = "servermon", version, about)]
struct Cli {
    /// Path to the report JSON, or "-" to read standard input.
    #[arg(short, long)]
    report: String,

    /// Path to a TOML configuration file (optional).
    #[arg(short, long)]
    config: Option<String>,

    /// Decimal places for formatted sizes (at most 10); overrides the config file.
    #[arg(long)]
    precision: Option<usize>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Exit with an error if any section failed to decode.
    #[arg(long)]
    strict: bool,
}

fn read_report(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read report from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read report {source}"))
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the snapshot.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "servermon=info,servermon_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app_config = if let Some(ref path) = cli.config {
        config::AppConfig::from_file(path)?
    } else {
        config::AppConfig::default()
    };
    if let Some(precision) = cli.precision {
        app_config.display = DisplaySettings::with_precision(precision);
    }
    let strict = cli.strict || app_config.fail_on_section_errors;
    debug!(?app_config, strict, "Configuration loaded");

    let raw = read_report(&cli.report)?;
    let report: ServerReport = serde_json::from_str(&raw)
        .with_context(|| format!("report {} is not a valid report envelope", cli.report))?;

    let normalized = servermon_core::normalize(&report, &app_config.display)
        .with_context(|| format!("report {} was rejected", cli.report))?;

    let snapshot = &normalized.snapshot;
    info!(
        host = %snapshot.name,
        domain = %snapshot.domain,
        reported_at = %snapshot.reported_at,
        services = snapshot.services.len(),
        disks = snapshot.disks.len(),
        errors = normalized.errors.len(),
        "Report normalized"
    );

    let output = if cli.pretty {
        serde_json::to_string_pretty(&normalized)?
    } else {
        serde_json::to_string(&normalized)?
    };
    println!("{output}");

    if strict && !normalized.errors.is_empty() {
        for err in &normalized.errors {
            warn!(key = err.key(), "{err}");
        }
        bail!(
            "{} section(s) of the report could not be decoded",
            normalized.errors.len()
        );
    }

    Ok(())
}
