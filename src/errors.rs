//! Unified application error type.
//! All modules (core, cli, config, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before an answer was given")]
    InputClosed,

    // ---------------------------
    // Data loading
    // ---------------------------
    #[error("Data file not found: {}", .0.display())]
    MissingDataFile(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid start time '{value}' at line {line}")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Invalid trip duration '{value}' at line {line}")]
    InvalidDuration { line: u64, value: String },

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Unknown city: {0} (choose Chicago, New York City or Washington)")]
    InvalidCity(String),

    #[error("Unknown filter: {0} (choose month, day, both or none)")]
    InvalidFilterMode(String),

    #[error("Unknown month: {0} (data covers January to June)")]
    InvalidMonth(String),

    #[error("Unknown day of week: {0}")]
    InvalidDay(String),

    #[error("Filter '{mode}' requires a {what}")]
    MissingFilterValue { mode: String, what: &'static str },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
