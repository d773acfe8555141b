//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
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

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Malformed stored data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage quota exceeded while writing '{key}' ({needed} bytes, {available} available)")]
    StorageFull {
        key: String,
        needed: usize,
        available: usize,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid attendance status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Cannot mark attendance for a future date: {0}")]
    FutureDate(String),

    #[error("No student found for '{0}'")]
    StudentNotFound(String),

    #[error("Roll number '{0}' is shared by several students (ids: {ids}); pass the student id instead", ids = .1.join(", "))]
    AmbiguousStudent(String, Vec<String>),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
