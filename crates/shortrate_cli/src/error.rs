//! CLI error types.

use shortrate_pricing::mc::PricingError;
use shortrate_pricing::request::RequestError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `shortrate` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing parameters were rejected.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// A JSON record could not be priced.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The estimate came out NaN or infinite.
    #[error("Numerical degeneracy: bond_price={bond_price}, variance={variance}")]
    NumericalDegeneracy {
        /// Reported price.
        bond_price: f64,
        /// Reported variance.
        variance: f64,
    },
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::FileNotFound("input.json".to_string());
        assert_eq!(err.to_string(), "File not found: input.json");

        let err = CliError::from(PricingError::invalid_parameter("maturity", "must be positive"));
        assert!(err.to_string().contains("maturity"));

        let err = CliError::NumericalDegeneracy {
            bond_price: f64::INFINITY,
            variance: f64::NAN,
        };
        assert!(err.to_string().contains("inf"));
    }
}
