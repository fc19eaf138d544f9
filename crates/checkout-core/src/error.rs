//! # Payment Error Types
//!
//! Typed error handling for checkout.
//! All fallible operations return `Result<T, PaymentError>`.

use crate::processor::PaymentMethod;
use thiserror::Error;

/// Core error type for checkout operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (unreadable file, missing path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The processor refused the payment
    #[error("Payment declined [{method}]: {reason}")]
    PaymentDeclined {
        method: PaymentMethod,
        reason: String,
    },
}

impl PaymentError {
    /// Returns true if the failure came from a processor rather than setup
    pub fn is_payment_failure(&self) -> bool {
        matches!(self, PaymentError::PaymentDeclined { .. })
    }
}

impl From<toml::de::Error> for PaymentError {
    fn from(err: toml::de::Error) -> Self {
        PaymentError::Serialization(err.to_string())
    }
}

/// Result type alias for checkout operations
pub type PaymentResult<T> = Result<T, PaymentError>;
