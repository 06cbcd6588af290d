//! Error types for the calculator

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Device name is required")]
    MissingName,

    #[error("Enter either a manual power or a current, not both")]
    ConflictingInput,

    #[error("Device power must be greater than 0 W (got {0})")]
    InvalidPower(f64),

    #[error("Hours per day must be between 0 and 24 (got {0})")]
    InvalidHours(f64),

    #[error("Period must be at least 1 day (got {0})")]
    InvalidDays(i64),

    #[error("Rate per kWh must be greater than 0 and at most 10000 (got {0})")]
    InvalidRate(f64),

    #[error("Unknown appliance: {0}")]
    UnknownAppliance(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether this is a form-level failure the user can correct and retry
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingName
                | Error::ConflictingInput
                | Error::InvalidPower(_)
                | Error::InvalidHours(_)
                | Error::InvalidDays(_)
                | Error::InvalidRate(_)
                | Error::UnknownAppliance(_)
        )
    }

    /// Translation key for the user-facing message of validation errors
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Error::MissingName => Some("error.missing_name"),
            Error::ConflictingInput => Some("error.conflicting_input"),
            Error::InvalidPower(_) => Some("error.invalid_power"),
            Error::InvalidHours(_) => Some("error.invalid_hours"),
            Error::InvalidDays(_) => Some("error.invalid_days"),
            Error::InvalidRate(_) => Some("error.invalid_rate"),
            Error::UnknownAppliance(_) => Some("error.unknown_appliance"),
            _ => None,
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
