//! kml_cities library: ordered city extraction from KML tracks
//!
//! Reads the vertices of every Placemark in a KML document, reverse geocodes
//! them (offline against a local gazetteer, or online against a
//! Nominatim-compatible service), filters and numbers the results, and writes
//! CSV reports of the places the route passes through, in traversal order.
//!
//! # Example
//!
//! ```no_run
//! use kml_cities::{Config, run_extraction};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_kml: std::path::PathBuf::from("route.kml"),
//!     unique_only: true,
//!     sample_every: 5,
//!     ..Default::default()
//! };
//!
//! let report = run_extraction(config).await?;
//! println!("{} vertices, {} rows", report.points_extracted, report.rows_written());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod geocode;
pub mod initialization;
pub mod kml;
pub mod models;
pub mod pipeline;

// Re-export public API
pub use config::{Config, DedupOn, GeocodeMode, LogFormat, LogLevel};
pub use error_handling::{
    ExportError, GazetteerError, InitializationError, KmlError, LookupError, LookupStats,
};
pub use run::{run_extraction, ExtractionReport, ReportKind, WrittenReport};

// Internal run module (wires extraction, geocoding, filtering and export)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{print_lookup_statistics, print_sequencer_statistics};
    use crate::config::{Config, GeocodeMode};
    use crate::error_handling::{KmlError, LookupStats};
    use crate::export::{
        city_sequence, summarize_segments, write_cities_csv, write_segments_csv,
        write_trace_csv, CityMode,
    };
    use crate::geocode::init_geocoder;
    use crate::kml::parse_kml_file;
    use crate::pipeline::{run_pipeline, SequencerOptions, SequencerStats};

    /// Which report a [`WrittenReport`] refers to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ReportKind {
        /// One row per retained point
        Trace,
        /// City-only sequence
        Cities,
        /// Per-Placemark summary
        Segments,
    }

    /// A CSV file produced by the run.
    #[derive(Debug, Clone)]
    pub struct WrittenReport {
        /// Report type
        pub kind: ReportKind,
        /// Output path
        pub path: PathBuf,
        /// Data rows written (header excluded)
        pub rows: usize,
    }

    /// Results of an extraction run.
    #[derive(Debug, Clone)]
    pub struct ExtractionReport {
        /// Vertices found in the KML document
        pub points_extracted: usize,
        /// Geocoder actually used (after any fallback)
        pub geocode_mode: GeocodeMode,
        /// Filter counters
        pub stats: SequencerStats,
        /// Reports written, primary first
        pub reports: Vec<WrittenReport>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl ExtractionReport {
        /// Rows in the primary report.
        pub fn rows_written(&self) -> usize {
            self.reports
                .iter()
                .find(|r| r.kind == ReportKind::Trace)
                .map(|r| r.rows)
                .unwrap_or(0)
        }
    }

    /// Runs an extraction with the provided configuration.
    ///
    /// Parses the KML, geocodes and filters its vertices in order, then writes
    /// the primary report and any optional reports the configuration asks for.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input cannot be read or is not well-formed XML
    /// - The document contains no usable vertices (`KmlError::NoVertices`)
    /// - A report cannot be written
    ///
    /// Geocoding failures are not errors; affected rows have empty place fields.
    pub async fn run_extraction(config: Config) -> Result<ExtractionReport> {
        let start_time = Instant::now();

        let points = parse_kml_file(&config.input_kml).with_context(|| {
            format!("Failed to read vertices from {}", config.input_kml.display())
        })?;
        if points.is_empty() {
            return Err(KmlError::NoVertices(config.input_kml.clone()).into());
        }
        let points_extracted = points.len();
        info!(
            "Extracted {} vertices from {}",
            points_extracted,
            config.input_kml.display()
        );

        let lookup_stats = Arc::new(LookupStats::new());
        let geocoder = init_geocoder(&config, Arc::clone(&lookup_stats));
        let geocode_mode = geocoder.mode();

        let (rows, stats) =
            run_pipeline(points, &geocoder, SequencerOptions::from_config(&config)).await;

        let mut reports = Vec::new();
        let written = write_trace_csv(&config.output, &rows).context("Failed to write primary report")?;
        reports.push(WrittenReport {
            kind: ReportKind::Trace,
            path: config.output.clone(),
            rows: written,
        });

        if let Some(path) = &config.cities_output {
            let entries = city_sequence(&rows, CityMode::from_flag(config.cities_global_unique));
            let written = write_cities_csv(path, &entries).context("Failed to write city-only report")?;
            reports.push(WrittenReport {
                kind: ReportKind::Cities,
                path: path.clone(),
                rows: written,
            });
        }

        if let Some(path) = &config.segments_output {
            let summaries = summarize_segments(&rows);
            let written = write_segments_csv(path, &summaries, config.segment_stats)
                .context("Failed to write segment summary")?;
            reports.push(WrittenReport {
                kind: ReportKind::Segments,
                path: path.clone(),
                rows: written,
            });
        }

        print_sequencer_statistics(&stats);
        print_lookup_statistics(&lookup_stats);

        Ok(ExtractionReport {
            points_extracted,
            geocode_mode,
            stats,
            reports,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
