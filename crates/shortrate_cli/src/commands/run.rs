//! Run command implementation
//!
//! Prices a bond from JSON input and solver-option records on disk.

use std::path::Path;

use serde::de::DeserializeOwned;
use shortrate_pricing::request::{price_records, BondInput, BondPriceResponse, SolverOptions};
use tracing::{debug, info};

use super::ensure_finite;
use crate::config::ShortRateConfig;
use crate::output::{decimal, render};
use crate::{CliError, Result};

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Fills option keys absent from the record with configured values.
pub fn resolve_options(options: Option<SolverOptions>, config: &ShortRateConfig) -> SolverOptions {
    let options = options.unwrap_or_default();
    SolverOptions {
        num_simulations: options
            .num_simulations
            .or(Some(config.num_simulations as f64)),
        seed: options.seed.or(config.seed),
        time_step: options.time_step.or(Some(config.time_step)),
    }
}

/// Prices the records and returns the rendered output with the response.
pub fn execute(
    input: &Path,
    options: Option<&Path>,
    config: &ShortRateConfig,
) -> Result<(String, BondPriceResponse)> {
    info!("Reading input record: {}", input.display());
    let bond: BondInput = read_record(input)?;

    let options = match options {
        Some(path) => {
            info!("Reading solver options: {}", path.display());
            read_record::<Option<SolverOptions>>(path)?
        }
        None => None,
    };
    let options = resolve_options(options, config);
    debug!(?bond, ?options, "resolved records");

    let response = price_records(&bond, &options)?;
    let rows = [
        ("Bond price", decimal(response.bond_price)),
        ("Variance", decimal(response.variance)),
    ];
    let rendered = render(&response, &rows, config.format)?;
    Ok((rendered, response))
}

/// Run the run command
pub fn run(input: &Path, options: Option<&Path>, config: &ShortRateConfig) -> Result<()> {
    let (rendered, response) = execute(input, options, config)?;
    println!("{}", rendered);
    info!("Pricing complete");
    ensure_finite(response.bond_price, response.variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn json_config() -> ShortRateConfig {
        ShortRateConfig {
            format: OutputFormat::Json,
            seed: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_deterministic_record() {
        let input = json_file(
            r#"{"Initial Interest Rate": 0.03, "Volatility": 0.0, "Maturity Time": 12}"#,
        );
        let options = json_file(r#"{"NumberOfSimulations": 1000}"#);

        let (rendered, response) =
            execute(input.path(), Some(options.path()), &json_config()).unwrap();

        assert_relative_eq!(response.bond_price, 0.9704455335, epsilon = 1e-10);
        assert_eq!(response.variance, 0.0);

        let parsed: BondPriceResponse = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_run_without_options_file() {
        let input = json_file(
            r#"{"Initial Interest Rate": 0.04, "Volatility": 0.02, "Maturity Time": 12}"#,
        );
        let config = ShortRateConfig {
            num_simulations: 2_000,
            ..json_config()
        };

        let (_, response) = execute(input.path(), None, &config).unwrap();
        assert!(response.variance > 0.0);
        assert!((response.bond_price - (-0.04f64).exp()).abs() < 0.01);
    }

    #[test]
    fn test_null_options_file_uses_config() {
        let input = json_file(
            r#"{"Initial Interest Rate": 0.03, "Volatility": 0.0, "Maturity Time": 6}"#,
        );
        let options = json_file("null");

        let (_, response) = execute(input.path(), Some(options.path()), &json_config()).unwrap();
        assert_relative_eq!(response.bond_price, (-0.015f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_missing_input_file() {
        let err = execute(
            Path::new("/nonexistent/input.json"),
            None,
            &json_config(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_malformed_input_file() {
        let input = json_file(r#"{"Volatility": 0.01}"#);
        let err = execute(input.path(), None, &json_config()).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_resolve_options_prefers_record() {
        let config = ShortRateConfig {
            num_simulations: 4_000,
            time_step: 0.02,
            seed: Some(9),
            ..Default::default()
        };
        let record = SolverOptions {
            num_simulations: Some(100.0),
            seed: None,
            time_step: None,
        };

        let resolved = resolve_options(Some(record), &config);
        assert_eq!(resolved.num_simulations, Some(100.0));
        assert_eq!(resolved.seed, Some(9));
        assert_eq!(resolved.time_step, Some(0.02));

        let defaults = resolve_options(None, &config);
        assert_eq!(defaults.num_simulations, Some(4_000.0));
    }
}
