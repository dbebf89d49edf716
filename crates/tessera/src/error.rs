//! CLI errors.

use std::path::PathBuf;

use tessera_atelier::AtelierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid description in {path}: {source}")]
    Description {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Reconcile(#[from] AtelierError),
}

pub type CliResult<T> = Result<T, CliError>;
