//! qlval demo driver
//!
//! Runs the example valuations and prints labeled results.
//!
//! # Commands
//!
//! - `qlval-demo european` - closed-form European option price
//! - `qlval-demo american [--method baw|binomial]` - American option price and Greeks
//! - `qlval-demo prelims` - compounding, zero-coupon bond, annuity and day count
//! - `qlval-demo all` - everything above (the default)
//!
//! Results go to stdout; logs go to stderr and are filtered by `RUST_LOG`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::american::{AmericanMethod, TreeSettings};
use config::ScenarioConfig;
use error::Result;
use qlval::methods::TreeKind;
use qlval::pricingengines::DEFAULT_CONVERGENCE_TOLERANCE;

/// Vanilla option pricing and fixed-income valuation examples
#[derive(Parser)]
#[command(name = "qlval-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scenario file (TOML); built-in defaults are used without one
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the European option
    European,

    /// Price the American option and its Greeks
    American {
        /// Pricing method
        #[arg(short, long, value_enum, default_value_t = AmericanMethod::Baw)]
        method: AmericanMethod,

        /// Binomial step count; refined until convergence when omitted
        #[arg(short, long)]
        steps: Option<usize>,

        /// Binomial tree (crr, jr, lr)
        #[arg(short, long, default_value = "lr")]
        tree: TreeKind,

        /// Convergence tolerance between successive binomial prices
        #[arg(long, default_value_t = DEFAULT_CONVERGENCE_TOLERANCE)]
        tolerance: f64,
    },

    /// Compounding, zero-coupon bond, annuity and day count
    Prelims,

    /// Run every example
    All,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let scenario = ScenarioConfig::load(cli.config.as_deref())?;
    debug!(?scenario, "loaded scenario");

    let default_tree = TreeSettings {
        kind: TreeKind::LeisenReimer,
        steps: None,
        tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
    };
    match cli.command.unwrap_or(Commands::All) {
        Commands::European => commands::european::run(&scenario.option),
        Commands::American {
            method,
            steps,
            tree,
            tolerance,
        } => commands::american::run(
            &scenario.option,
            method,
            TreeSettings {
                kind: tree,
                steps,
                tolerance,
            },
        ),
        Commands::Prelims => commands::prelims::run(&scenario),
        Commands::All => {
            commands::european::run(&scenario.option)?;
            commands::american::run(&scenario.option, AmericanMethod::Baw, default_tree)?;
            commands::prelims::run(&scenario)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)?;
    Ok(())
}
