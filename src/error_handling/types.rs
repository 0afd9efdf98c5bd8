//! Error type definitions.
//!
//! This module defines the fatal error types returned by the library and the
//! categories used to count best-effort lookup failures.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The geocoding service base URL could not be parsed.
    #[error("Invalid geocoding service URL '{url}': {source}")]
    ServiceUrlError {
        /// URL as configured
        url: String,
        /// Parse failure
        source: url::ParseError,
    },

    /// The geocoding service URL does not use http or https.
    #[error("Geocoding service URL must be http or https: {0}")]
    UnsupportedScheme(String),
}

/// Errors raised while reading the input KML document.
#[derive(Error, Debug)]
pub enum KmlError {
    /// The input file could not be read.
    #[error("Failed to read KML file {path}: {source}")]
    Io {
        /// Input path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The file is not UTF-8. KML 2.2 documents must be UTF-8 encoded.
    #[error("KML file {path} is not valid UTF-8: {source}")]
    NotUtf8 {
        /// Input path
        path: PathBuf,
        /// Decoding failure
        source: std::string::FromUtf8Error,
    },

    /// The document is not well-formed XML.
    #[error("Malformed KML at byte {position}: {source}")]
    Xml {
        /// Byte offset where the parser stopped
        position: u64,
        /// Parser failure
        source: quick_xml::Error,
    },

    /// The document parsed but contained no usable vertices.
    #[error("No points found in KML: {0}")]
    NoVertices(PathBuf),
}

/// Errors raised while loading the offline gazetteer.
#[derive(Error, Debug)]
pub enum GazetteerError {
    /// The dataset could not be opened or parsed as CSV.
    #[error("Failed to read gazetteer {path}: {source}")]
    Csv {
        /// Dataset path
        path: PathBuf,
        /// CSV or I/O failure
        source: csv::Error,
    },

    /// The dataset held no usable places.
    #[error("Gazetteer {0} contains no usable places")]
    Empty(PathBuf),
}

/// Errors raised while writing a CSV report.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created.
    #[error("Failed to create output file {path}: {source}")]
    Create {
        /// Output path
        path: PathBuf,
        /// CSV or I/O failure
        source: csv::Error,
    },

    /// A record could not be written.
    #[error("Failed to write CSV record: {0}")]
    Write(#[from] csv::Error),

    /// Buffered output could not be flushed to disk.
    #[error("Failed to flush CSV output: {0}")]
    Flush(#[from] std::io::Error),
}

/// Categories of best-effort lookup failures.
///
/// A lookup failure never aborts a run; the point is written with empty place
/// fields and the failure is counted under one of these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupError {
    /// Connection or request-level transport failure
    Transport,
    /// The request timed out
    Timeout,
    /// The service answered 429 Too Many Requests
    RateLimited,
    /// The service answered with a 5xx status
    ServerError,
    /// The service answered with another non-success status
    HttpStatus,
    /// The response body was not the expected shape
    MalformedResponse,
    /// The response had no address for this coordinate
    NoAddress,
    /// The offline dataset is missing or unreadable
    DatasetUnavailable,
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupError {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupError::Transport => "Transport error",
            LookupError::Timeout => "Request timeout",
            LookupError::RateLimited => "Too many requests",
            LookupError::ServerError => "Server error",
            LookupError::HttpStatus => "Unexpected HTTP status",
            LookupError::MalformedResponse => "Malformed response",
            LookupError::NoAddress => "No address in response",
            LookupError::DatasetUnavailable => "Offline dataset unavailable",
        }
    }

    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LookupError::Transport
                | LookupError::Timeout
                | LookupError::RateLimited
                | LookupError::ServerError
        )
    }
}
