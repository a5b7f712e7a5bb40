//! Shortrate CLI - zero-coupon bond pricing from the command line
//!
//! # Commands
//!
//! - `shortrate price --rate <r> --volatility <v> --maturity-months <m>` - Monte Carlo price
//! - `shortrate run --input <file> [--options <file>]` - Price JSON records
//! - `shortrate analytical --rate <r> --volatility <v> --maturity-months <m>` - Closed-form price
//!
//! Settings come from `shortrate.toml`, `SHORTRATE_*` environment variables
//! and command line flags, in increasing priority.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::{build_config, CliArgs, OutputFormat};

/// Zero-coupon bond pricer for an arithmetic Brownian short rate
#[derive(Parser)]
#[command(name = "shortrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./shortrate.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a zero-coupon bond by Monte Carlo simulation
    Price {
        /// Initial short rate
        #[arg(short, long, allow_hyphen_values = true)]
        rate: f64,

        /// Short-rate volatility
        #[arg(long)]
        volatility: f64,

        /// Maturity in months
        #[arg(short, long)]
        maturity_months: f64,

        /// Number of Monte Carlo paths
        #[arg(short = 'n', long)]
        simulations: Option<usize>,

        /// Time step in years
        #[arg(short, long)]
        time_step: Option<f64>,

        /// Generator seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Price a bond from JSON input and options records
    Run {
        /// Path to the input record
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the solver options record
        #[arg(short, long)]
        options: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the closed-form bond price
    Analytical {
        /// Initial short rate
        #[arg(short, long, allow_hyphen_values = true)]
        rate: f64,

        /// Short-rate volatility
        #[arg(long)]
        volatility: f64,

        /// Maturity in months
        #[arg(short, long)]
        maturity_months: f64,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (seed, format) = match &self.command {
            Commands::Price { seed, format, .. } => (*seed, *format),
            Commands::Run { format, .. } | Commands::Analytical { format, .. } => (None, *format),
        };
        CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            seed,
            format,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    // Initialise tracing; RUST_LOG wins unless --verbose is given
    let filter = if cli.verbose {
        EnvFilter::new(config.log_level.as_filter_str())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            rate,
            volatility,
            maturity_months,
            simulations,
            time_step,
            ..
        } => commands::price::run(
            &PriceArgs {
                rate,
                volatility,
                maturity_months,
                simulations,
                time_step,
            },
            &config,
        ),
        Commands::Run { input, options, .. } => {
            commands::run::run(&input, options.as_deref(), &config)
        }
        Commands::Analytical {
            rate,
            volatility,
            maturity_months,
            ..
        } => commands::analytical::run(rate, volatility, maturity_months, &config),
    }
}
