//! Core error types for Xchangy.
//!
//! Unparseable amount text and inadmissible keystrokes are ordinary control
//! flow (`Option` / [`crate::money::EditOutcome`]) and never surface here.
//! These errors only come from building domain values out of untrusted input.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
