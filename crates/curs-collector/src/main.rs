//! Exchange-rate collector CLI.
//!
//! ```bash
//! # collect every source into rates.json
//! curs-collector collect
//!
//! # only the national bank and two banks, to a dated file
//! curs-collector collect --sources bnm,maib,micb --output data/2026-02-02.json
//!
//! # 100 EUR in USD at maib's counter rates
//! curs-collector convert --amount 100 --from eur --to usd --source maib
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use curs_collector::{modules, CollectorConfig};
use curs_core::{init_logging, LogConfig, LogFormat};
use curs_data::ProviderRegistry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curs-collector")]
#[command(about = "Moldovan exchange-rate collector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: $CURS_CONFIG or config/curs.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format (pretty, json, compact)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all enabled sources and write the snapshot
    Collect {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only these source ids (comma separated, e.g. "bnm,maib")
        #[arg(long)]
        sources: Option<String>,
    },

    /// List the configured sources
    Sources,

    /// Convert an amount with the rates of a saved snapshot
    Convert {
        #[arg(short, long)]
        amount: f64,

        /// Currency code to convert from (e.g. eur, mdl)
        #[arg(short, long)]
        from: String,

        /// Currency code to convert to
        #[arg(short, long)]
        to: String,

        /// Snapshot file (default: configured output path)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Source whose rates are used
        #[arg(short, long, default_value = "bnm")]
        source: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CollectorConfig::load(cli.config.as_deref())?;

    let mut log_config = LogConfig::from(&config.app.logging);
    if let Some(level) = cli.log_level {
        log_config.level = level;
    }
    if let Some(format) = cli.log_format {
        log_config.format = format;
    }
    init_logging(log_config).map_err(|e| anyhow::anyhow!("logging init failed: {}", e))?;

    tracing::debug!(path = %config.path.display(), "configuration loaded");

    match cli.command {
        Commands::Collect { output, sources } => {
            let mut config = config;
            if let Some(output) = output {
                config = config.with_output(output);
            }
            if let Some(sources) = sources {
                config = config.with_sources(&sources);
            }

            let stats = modules::run_collect(&config)
                .await
                .context("collection failed")?;
            stats.log_summary("exchange rates");
        }
        Commands::Sources => {
            let registry = ProviderRegistry::from_config(&config.app.sources);
            let today = chrono::Local::now().date_naive();
            for provider in registry.iter() {
                println!(
                    "{:<14} {:<28} {:<10} {}",
                    provider.id(),
                    provider.name(),
                    provider.kind().to_string(),
                    provider.url(today)
                );
            }
        }
        Commands::Convert {
            amount,
            from,
            to,
            input,
            source,
        } => {
            let path = input.unwrap_or_else(|| config.output_path().to_path_buf());
            let conversion = modules::convert_from_file(&path, &source, amount, &from, &to)
                .with_context(|| format!("cannot convert with {}", path.display()))?;

            println!(
                "{:.2} {} = {:.2} {} (1 {} = {:.4} {}, {})",
                conversion.amount,
                conversion.from.as_str().to_uppercase(),
                conversion.result,
                conversion.to.as_str().to_uppercase(),
                conversion.from.as_str().to_uppercase(),
                conversion.unit_rate,
                conversion.to.as_str().to_uppercase(),
                source
            );
        }
    }

    Ok(())
}
