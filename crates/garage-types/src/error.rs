//! Error types for the garage showcase

use thiserror::Error;

/// Rejected attribute assignments
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("mileage cannot be negative (got {0})")]
    NegativeMileage(f64),

    #[error("mileage must be a number")]
    NonNumericMileage,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fleet file error: {0}")]
    FleetLoad(String),
}

pub type Result<T> = std::result::Result<T, Error>;
