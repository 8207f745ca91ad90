//! Error types for the budget core.
//!
//! Each concern gets its own enum so callers can tell a bad keystroke from a
//! missing file from an unreachable database. The command layer wraps these
//! in `anyhow` with context.

use std::io;
use std::path::PathBuf;

/// A value typed into the entry form could not be used as an amount.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("{field} must be a number, got \"{value}\"")]
    NotANumber { field: &'static str, value: String },

    #[error("amounts are too large to total")]
    TotalOutOfRange,
}

/// The import stream could not be opened or read.
///
/// Malformed lines never produce this error; they are counted as skips.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ImportError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read import stream: {0}")]
    Read(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ExportError {
    #[error("could not write export: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// A persist call failed. The batch was rolled back in full.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PersistError {
    #[error("could not connect to {}: {source}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database write failed: {0}")]
    Execute(#[from] rusqlite::Error),
}
