//! File logging.
//!
//! The TUI owns stdout, so trace output goes to a JSON log file instead:
//! `--log-file` when given, otherwise `folio.log` in the platform data
//! directory. The filter comes from `FOLIO_LOG` (e.g. `FOLIO_LOG=folio=debug`)
//! and defaults to `folio=info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "folio=info";

pub fn default_log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "folio")
        .map(|dirs| dirs.data_local_dir().join("folio.log"))
}

/// Install the global subscriber. Returns the log path, or `None` when
/// logging is disabled because the file could not be opened.
pub fn init_logging(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path.or_else(default_log_path)?;
    let file = open_log_file(&path).ok()?;

    let filter =
        EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(path)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
