//! Custom error types for Cashflow
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cashflow operations
#[derive(Error, Debug)]
pub enum CashflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (including corrupt persisted state)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Export was requested on an empty transaction list
    #[error("No data to export!")]
    NothingToExport,

    /// Any failure reaching or decoding the advice/speech provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Audio output errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// The advisor chat log is unusable
    #[error("Conversation error: {0}")]
    Conversation(String),

    /// A single-flight operation is already running
    #[error("Busy: {0}")]
    Busy(String),
}

impl CashflowError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a provider failure
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for CashflowError {
    fn from(err: reqwest::Error) -> Self {
        Self::Provider(err.to_string())
    }
}

impl From<base64::DecodeError> for CashflowError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Provider(format!("invalid audio payload: {}", err))
    }
}

impl From<csv::Error> for CashflowError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Cashflow operations
pub type CashflowResult<T> = Result<T, CashflowError>;
