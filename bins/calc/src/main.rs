//! Coop calculation driver
//!
//! Reads a JSON request file, runs one engine operation and prints the
//! result as pretty JSON.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coop_shared::EngineConfig;

#[derive(Parser)]
#[command(name = "coop-calc")]
#[command(about = "Cooperative ledger and loan/savings calculations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate entry collections into a balance summary
    Balance {
        /// Request file
        request: PathBuf,
    },

    /// Aggregate and require debits == credits with a zero signed balance
    StrictBalance {
        /// Request file
        request: PathBuf,
    },

    /// Stamp running balances onto general-ledger entries
    Stamp {
        /// Request file
        request: PathBuf,
    },

    /// Resolve the charge of a rate scheme for a loan
    Charges {
        /// Request file
        request: PathBuf,
    },

    /// Installment count and amount, optionally suggested terms
    Schedule {
        /// Request file
        request: PathBuf,
    },

    /// Apply an automatic loan deduction rule
    Deduction {
        /// Request file
        request: PathBuf,
    },

    /// Fines on a missed amortization
    Fines {
        /// Request file
        request: PathBuf,
    },

    /// Periodic and straight loan interest
    Interest {
        /// Request file
        request: PathBuf,
    },

    /// Accrue savings interest for one or more accounts
    SavingsInterest {
        /// Request file
        request: PathBuf,
    },

    /// Ending balance from precomputed savings interest
    SavingsEnding {
        /// Request file
        request: PathBuf,
    },

    /// Day-by-day summary of a savings period
    DailySummary {
        /// Request file
        request: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = EngineConfig::load()?;

    // Initialize tracing; logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Command::Balance { request } => commands::balance(&commands::read(&request)?, false)?,
        Command::StrictBalance { request } => commands::balance(&commands::read(&request)?, true)?,
        Command::Stamp { request } => commands::stamp(commands::read(&request)?),
        Command::Charges { request } => commands::charges(&commands::read(&request)?, &config),
        Command::Schedule { request } => commands::schedule(&commands::read(&request)?)?,
        Command::Deduction { request } => commands::deduction(&commands::read(&request)?),
        Command::Fines { request } => commands::fines(&commands::read(&request)?),
        Command::Interest { request } => commands::interest(&commands::read(&request)?),
        Command::SavingsInterest { request } => {
            commands::savings_interest(&commands::read(&request)?, &config)
        }
        Command::SavingsEnding { request } => {
            commands::savings_ending(&commands::read(&request)?, &config)
        }
        Command::DailySummary { request } => commands::daily_summary(&commands::read(&request)?)?,
    };

    debug!("Writing result");
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
