//! Error types for the short-rate Monte Carlo pipeline.
//!
//! Only parameter validation can fail. Numerical degeneracy (NaN or infinite
//! discount factors from extreme inputs) is not an error: it flows through to
//! the [`PricingResult`](super::PricingResult) and is reported there.

use thiserror::Error;

/// Error raised by the pricing pipeline.
///
/// All variants are raised synchronously, before any path buffer is
/// allocated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl PricingError {
    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PricingError>;
