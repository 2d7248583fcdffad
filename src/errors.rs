//! Unified application error type.
//! All modules (import, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    // ---------------------------
    // Pipeline errors
    // ---------------------------
    #[error("No data to process")]
    EmptyInput,

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration {path}: {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save configuration {path}: {source}")]
    ConfigSave {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn config_load(path: &std::path::Path, source: io::Error) -> Self {
        AppError::ConfigLoad {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn config_save(path: &std::path::Path, source: io::Error) -> Self {
        AppError::ConfigSave {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
