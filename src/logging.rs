//! Logging setup: tracing into a log file, since the panel owns the terminal.
//!
//! The level comes from `--log-level`. A `POTIONCOLORIZER_LOG` directive
//! string, when set and valid, replaces it entirely.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file used when none is given.
pub const DEFAULT_LOG_FILE: &str = "potioncolorizer.log";

/// Environment variable holding a full filter directive.
pub const LOG_ENV: &str = "POTIONCOLORIZER_LOG";

/// Where the appender writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl LogTarget {
    /// Split a user-given path into directory and file name.
    ///
    /// A bare file name lands in the working directory; a path without a
    /// file name (`..`, `/`) keeps its directory and uses [`DEFAULT_LOG_FILE`].
    pub fn resolve(path: Option<&Path>) -> Self {
        let path = path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
        match path.file_name() {
            Some(file) => Self {
                dir: path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."))
                    .to_path_buf(),
                file: PathBuf::from(file),
            },
            None => Self {
                dir: path.to_path_buf(),
                file: PathBuf::from(DEFAULT_LOG_FILE),
            },
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

/// Filter for this crate's events at `level`.
///
/// An unknown level falls back to `info` for this crate.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("potioncolorizer={level}"))
        .unwrap_or_else(|_| EnvFilter::new("potioncolorizer=info"))
}

fn env_filter() -> Option<EnvFilter> {
    let directives = std::env::var(LOG_ENV).ok()?;
    EnvFilter::try_new(directives).ok()
}

/// Initialize tracing with file output.
///
/// Returns a guard that must be held for the duration of the program to ensure
/// logs are flushed.
pub fn init_logging(log_path: Option<&Path>, level: &str) -> WorkerGuard {
    let target = LogTarget::resolve(log_path);
    let file_appender = tracing_appender::rolling::never(&target.dir, &target.file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let from_env = env_filter();
    let overridden = from_env.is_some();
    let filter = from_env.unwrap_or_else(|| level_filter(level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    // Span enter/exit is too chatty for release builds
    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    if overridden {
        tracing::info!(path = %target.path().display(), "logging with {LOG_ENV} directives");
    } else {
        tracing::info!(path = %target.path().display(), level, "logging started");
    }

    guard
}
