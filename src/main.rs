//! tripadvisor - query location data from the Tripadvisor Content API
//!
//! Prints coordinates, review summaries, or reviews of a location as JSON.

use std::sync::Arc;

use clap::Parser;
use tracing::Level;

use tripadvisor_service::cli::{Cli, Command};
use tripadvisor_service::TripadvisorService;

/// Installs the stderr log subscriber; `verbose` enables debug output
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut service = TripadvisorService::new(cli.service_config()?);
    if let Some(cache) = cli.cache_manager()? {
        tracing::debug!(dir = %cache.dir().display(), "using response cache");
        service = service.with_cache(Arc::new(cache));
    }

    tracing::debug!(location_id = cli.command.location_id(), "running query");
    let output = match cli.command {
        Command::LatLong { location_id } => {
            serde_json::to_string_pretty(&service.get_lat_long(location_id).await?)?
        }
        Command::Details { location_id } => {
            serde_json::to_string_pretty(&service.get_hotel_reviews_details(location_id).await)?
        }
        Command::Reviews { location_id } => {
            serde_json::to_string_pretty(&service.get_reviews_list(location_id).await)?
        }
    };

    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
