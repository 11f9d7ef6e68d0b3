//! Core error types for the demo dashboard.
//!
//! Generation and metrics are total functions over well-formed input, so the
//! only failures are configuration values outside their supported ranges.

use chrono::NaiveDate;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unknown dashboard command: {0}")]
    UnknownCommand(String),
}

/// Validation errors for user input and settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Asset count must be between 1 and {max}, got {requested}")]
    AssetCountOutOfRange { requested: usize, max: usize },

    #[error("History window must be at least one day")]
    EmptyHistoryWindow,

    #[error("History window must be at most {max} days, got {requested}")]
    HistoryWindowTooLong { requested: usize, max: usize },

    #[error("A {days}-day history window ending {end} starts before the earliest supported date")]
    HistoryWindowUnrepresentable { days: usize, end: NaiveDate },
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
