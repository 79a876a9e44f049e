use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("docking failed for {ligand:?} (exit code {exit_code:?})")]
    ExternalProcessFailure {
        ligand: PathBuf,
        exit_code: Option<i32>,
    },

    #[error("{id}: no results available")]
    CompoundParseFailure { id: String },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error in {path:?}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ScreenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScreenError>;
