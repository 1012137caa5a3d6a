//! Tocmount CLI Binary
//!
//! Resolves one root manifest reference and prints the fully-resolved tree.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tocmount::config::Settings;
use tocmount::logging::init_logging;
use tocmount::{ManifestFetcher, Resolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON dump of the resolved tree
    Json,
    /// Indented plain-text outline
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "tocmount", version, about = "Resolve a table-of-contents manifest tree")]
struct Cli {
    /// Root manifest reference: an http(s) address or a local path
    manifest: String,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    /// How to print the resolved tree
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    init_logging(&settings.logging).context("initializing logging")?;

    let fetcher = ManifestFetcher::new(settings.http_client()?);
    let resolver = Resolver::new(fetcher);
    let tree = resolver
        .resolve(&cli.manifest)
        .await
        .with_context(|| format!("resolving manifest {:?}", cli.manifest))?;

    match cli.format {
        OutputFormat::Json => println!("{tree}"),
        OutputFormat::Text => print!("{}", tree.to_outline()),
    }
    Ok(())
}
