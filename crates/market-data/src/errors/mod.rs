//! Error types for the stock data transformer.
//!
//! Every failure is local and synchronous: it is raised where the violation is
//! detected and surfaced unchanged by the composite operations.

use thiserror::Error;

/// Errors that can occur while normalizing provider stock datasets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockDataError {
    /// The series has no rows, so there is no current closing price.
    #[error("Stock series is empty")]
    EmptySeries,

    /// The series is too short for a metric that needs previous rows.
    #[error("Insufficient data: {required} rows required, {available} available")]
    InsufficientData {
        /// Minimum number of rows the metric needs
        required: usize,
        /// Number of rows the series actually has
        available: usize,
    },

    /// The previous closing price is zero, so a percent change is undefined.
    #[error("Division by zero: previous closing price is 0")]
    DivisionByZero,

    /// The dataset name has no parenthetical suffix to strip.
    #[error("Malformed stock name: {0}")]
    MalformedName(String),

    /// A timestamp could not be parsed into a valid instant.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A raw provider row does not match the positional schema.
    #[error("Malformed row: {0}")]
    MalformedRow(String),

    /// A metric does not fit the decimal range for the closes supplied.
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}

impl StockDataError {
    /// Stable identifier for the error variant, suitable for transport layers.
    ///
    /// ```
    /// use stockboard_market_data::errors::StockDataError;
    ///
    /// assert_eq!(StockDataError::EmptySeries.code(), "EMPTY_SERIES");
    /// assert_eq!(StockDataError::DivisionByZero.code(), "DIVISION_BY_ZERO");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySeries => "EMPTY_SERIES",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::MalformedName(_) => "MALFORMED_NAME",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::MalformedRow(_) => "MALFORMED_ROW",
            Self::ArithmeticOverflow(_) => "ARITHMETIC_OVERFLOW",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StockDataError>;
