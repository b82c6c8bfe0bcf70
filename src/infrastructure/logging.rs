//! Logging bootstrap for the qastore binary.
//!
//! The library only emits `log` records; the binary decides where they go.
//! Records are written to stderr so stdout stays clean for command output.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;

/// Start the stderr logger at `level`.
///
/// The returned handle must be kept alive for the life of the process.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when the logger backend cannot start (e.g. a logger
///   is already installed).
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let level = normalize_level(level)?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format_for_stderr(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    debug!(
        "event=app_start module=cli status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );

    Ok(handle)
}

pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected off|trace|debug|info|warn|error"
        )),
    }
}
