//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `kml_cities` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use kml_cities::config::{EXIT_FAILURE, EXIT_NO_POINTS};
use kml_cities::initialization::init_logger_with;
use kml_cities::{run_extraction, Config, KmlError};

#[tokio::main]
async fn main() -> Result<()> {
    // Lets KML_CITIES_NOMINATIM_URL / KML_CITIES_GAZETTEER come from a .env file
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_extraction(config).await {
        Ok(report) => {
            for written in &report.reports {
                println!("Wrote {} rows to {}", written.rows, written.path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("kml_cities error: {:#}", e);
            let code = match e.downcast_ref::<KmlError>() {
                Some(KmlError::NoVertices(_)) => EXIT_NO_POINTS,
                _ => EXIT_FAILURE,
            };
            process::exit(code);
        }
    }
}
