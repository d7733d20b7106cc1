//! Unified application error type.
//! Every stage (source, core, chart, cli) returns AppError so a failure
//! always identifies which part of the pipeline gave up.

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
    // Sheet retrieval
    // ---------------------------
    #[error("Sheet retrieval error: {0}")]
    Retrieval(String),

    #[error("Sheet grid error: {0}")]
    Grid(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic outcomes
    // ---------------------------
    #[error("No row in the sheet is filled in enough to report on")]
    InsufficientData,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Chart errors
    // ---------------------------
    #[error("Chart rendering error: {0}")]
    Render(String),
}

pub type AppResult<T> = Result<T, AppError>;
