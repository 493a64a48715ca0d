//! countrydex - Print the country listing for a cache directory
//!
//! Resolves the cache directory into a JSON array of `{name, code, region}`
//! records on stdout. Diagnostics go to stderr and are controlled by `RUST_LOG`.

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use countrydex::cli::{CliError, ListingConfig};
use countrydex::{cli::Cli, listing};

/// Installs the stderr log subscriber, defaulting to warnings only
fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let cli = Cli::parse();
    let config = ListingConfig::from_cli(&cli)?;

    let entries = listing::load_listing(&config).await;
    let json = listing::render(&entries, config.pretty).map_err(CliError::from)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}
