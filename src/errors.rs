//! Unified application error type.
//! Every layer (core, store, cli, config) returns AppError so the
//! presenter can turn any failure into a single operator-facing message.

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
    // Input validation
    // ---------------------------
    #[error("{0}")]
    InputValidation(String),

    #[error("Invalid day: {0} (use Mon, Tues, Wed, Thurs, Fri, Sat or Sun)")]
    InvalidDay(String),

    #[error("Counts changed since the last calculation: calculate again before confirming")]
    StaleCalculation,

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Could not save to spreadsheet: {0}")]
    Persistence(String),

    #[error("Could not open file: {0}")]
    FileOpen(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
