//! File-based logging for the CLI and the terminal UI.
//!
//! Output goes to rotating files only; writing to stderr would tear the
//! alternate screen while the UI is running. Events are `key=value` lines
//! with metadata only, note text is never logged.

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::{fs, path::Path};

const LOG_FILE_BASENAME: &str = "jot";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Starts the logger, or runs without one when the log directory or the
/// backend is unusable. Only storage failures stop the app.
pub(crate) fn start_logging(level: &str, log_dir: &Path) -> Option<LoggerHandle> {
    match init_logging(level, log_dir) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("jot: logging disabled: {err:#}");
            None
        }
    }
}

/// Starts the logger. Keep the returned handle alive until exit so buffered
/// lines get flushed.
fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("cannot create log directory `{}`", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    info!(
        "event=app_start module=logging status=ok platform={} version={} level={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_log_directory_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        let log_dir = blocker.join("logs");
        assert!(init_logging("info", &log_dir).is_err());
        assert!(start_logging("info", &log_dir).is_none());
    }
}
