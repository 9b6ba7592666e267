//! `tracing` subscriber setup.
//!
//! Installing is idempotent: the first successful call wins and later calls
//! are no-ops. `RUST_LOG` overrides the configured filter.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}

/// Install the global subscriber.
///
/// Logs go to `log_file` (appending) when given, otherwise to stderr.
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init_logging(filter: &str, log_file: Option<&Path>) -> Result<bool, LoggingError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::try_new(filter)?,
    };

    let installed = match log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::debug!(filter, log_file = ?log_file, "logging initialized");
    }
    Ok(installed)
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("logs").join("sprach.log");

        init_logging("debug", Some(&path)).unwrap();
        assert!(!init_logging("debug", Some(&path)).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn test_bad_filter_is_error() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(matches!(
            init_logging("sprach_core=verbose", None),
            Err(LoggingError::Filter(_))
        ));
    }
}
