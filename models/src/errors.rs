// models/src/errors.rs

use std::io;

pub use thiserror::Error;

/// A validation error. These carry the exact messages the administration
/// screens surface to the operator, so they double as response text.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// One or more required fields were empty or absent.
    #[error("All fields are required.")]
    MissingFields,
    /// A shift or booking interval ends at or before it starts.
    #[error("End time must be after start time.")]
    EndNotAfterStart,
    /// A time-of-day string could not be parsed.
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    /// A day-of-week string could not be parsed.
    #[error("invalid day of week: {0}")]
    InvalidDay(String),
    /// A calendar date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// A duration could not be parsed as whole minutes.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
    #[error("SKU must be alphanumeric and 3-10 characters long.")]
    InvalidSku,
    #[error("Size must be a positive number.")]
    NonPositiveSize,
    #[error("{0} cannot be negative.")]
    NegativeField(&'static str),
    #[error("invalid category: {0}")]
    InvalidCategory(String),
    #[error("invalid unit: {0}")]
    InvalidUnit(String),
    /// A delete request body named no selector field the resource knows.
    #[error("delete request names no selector field")]
    EmptySelector,
}

/// An error raised by the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("deserialization error: {0}")]
    Deserialization(String),
    #[error("record {0} was not found")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[cfg(feature = "sled-errors")]
    #[error(transparent)]
    Sled(#[from] sled::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(format!("JSON processing error: {}", err))
    }
}

/// A type alias for a `Result` that returns a `StoreError` on failure.
pub type StoreResult<T> = Result<T, StoreError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
