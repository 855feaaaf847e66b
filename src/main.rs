//! Skycast - daily outlook and weather narrative from a 3-hour forecast
//!
//! Reads a forecast payload, builds the outlook and prints it as text or JSON.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skycast::cli::{parse_format_arg, Cli, OutputFormat};
use skycast::data::read_forecast;
use skycast::render::{format_json, format_text};
use skycast::{build_outlook, OutlookConfig};

/// Sets up logging to stderr so stdout carries only the outlook
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "skycast=debug" } else { "skycast=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = OutlookConfig::from_cli(&cli)?;
    let format = parse_format_arg(&cli.format)?;

    let forecast = read_forecast(&cli.input, config.units)
        .with_context(|| format!("could not load forecast from {}", cli.input.display()))?;
    tracing::info!(samples = forecast.samples.len(), "loaded forecast");

    let outlook = build_outlook(
        &forecast.samples,
        forecast.utc_offset_seconds,
        cli.current.as_deref(),
        &config,
    );

    let rendered = match format {
        OutputFormat::Text => format_text(&outlook, config.units),
        OutputFormat::Json => format_json(&outlook).context("could not serialize outlook")?,
    };
    println!("{}", rendered.trim_end());

    Ok(())
}
