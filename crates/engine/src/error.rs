//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`Validation`] returned when an entry field fails validation.
//! - [`Authentication`] returned when credentials cannot be verified.
//! - [`BusinessRule`] returned when a domain rule is violated (duplicate email).
//! - [`KeyNotFound`] returned when an item is missing or has no id yet.
//! - [`Overflow`] returned when a computed amount does not fit in cents.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`Authentication`]: EngineError::Authentication
//!  [`BusinessRule`]: EngineError::BusinessRule
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`Overflow`]: EngineError::Overflow
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    BusinessRule(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("{0}")]
    Overflow(String),
    #[error("Credentials error: {0}")]
    Credentials(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Authentication(a), Self::Authentication(b)) => a == b,
            (Self::BusinessRule(a), Self::BusinessRule(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::Overflow(a), Self::Overflow(b)) => a == b,
            (Self::Credentials(a), Self::Credentials(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
