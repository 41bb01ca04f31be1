//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that a caller can
//! always tell bad input apart from bad data, and both apart from "no data".

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    /// Query failures from the data source, passed through untouched.
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input and data errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A mask or column did not line up with the table it was applied to.
    #[error("Index mismatch: expected {expected} rows, got {actual}")]
    IndexMismatch { expected: usize, actual: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
