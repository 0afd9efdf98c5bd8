//! Log output setup.
//!
//! `--log-format plain` writes a colored, emoji-tagged line per record for a
//! terminal. `--log-format json` writes one self-contained object per line so
//! the output can be piped straight into a log collector.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Installs the global logger.
///
/// `RUST_LOG` is read first so per-module directives still apply, then
/// `level` is forced on top of it for this crate and as the global default.
/// HTTP client internals are capped at `info` regardless.
///
/// ```bash
/// RUST_LOG=kml_cities=trace kml_cities --input-kml route.kml --log-level debug
/// ```
///
/// # Errors
///
/// Fails with `InitializationError::LoggerError` when a global logger is
/// already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for noisy in ["reqwest", "hyper", "hyper_util"] {
        builder.filter_module(noisy, LevelFilter::Info);
    }
    builder.filter_module("kml_cities", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(
                chrono::Utc::now().timestamp_millis(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{line}")
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let line = plain_line(record.level(), record.target(), &record.args().to_string());
            writeln!(buf, "{line}")
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// Renders one record as a single-line JSON object.
///
/// Every field goes through the serializer, so quotes, backslashes and
/// newlines in the message or target come out escaped.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn plain_line(level: Level, target: &str, msg: &str) -> String {
    let (tag, label) = match level {
        Level::Error => ("❌", level.as_str().red()),
        Level::Warn => ("⚠️", level.as_str().yellow()),
        Level::Info => ("✔️", level.as_str().green()),
        Level::Debug => ("🔍", level.as_str().blue()),
        Level::Trace => ("🔬", level.as_str().purple()),
    };
    format!("{} {} [{}] {}", tag, target.cyan(), label, msg)
}
