use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// wallet-check — fee calculation and balance checks for wallet transfers.
#[derive(Parser, Debug)]
#[command(name = "wallet-check", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a single fee for an amount
    Fee(FeeArgs),

    /// Check that balances cover an amount and its fees
    Check(InputArgs),

    /// Print the fee lines and total for an amount
    Lines(LinesArgs),
}

/// Arguments for the `fee` subcommand.
#[derive(Parser, Debug)]
pub struct FeeArgs {
    /// Fee kind tag (FIXED or FACTOR)
    #[arg(long)]
    pub kind: String,

    /// Fee parameter; repeat for multiple values
    #[arg(long = "param")]
    pub params: Vec<String>,

    /// Amount the fee is charged on
    #[arg(long, value_parser = parse_amount)]
    pub amount: Decimal,
}

/// Request document source shared by `check` and `lines`.
#[derive(Parser, Debug)]
pub struct InputArgs {
    /// JSON request file; falls back to WALLET_CHECK_INPUT, then stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `lines` subcommand.
#[derive(Parser, Debug)]
pub struct LinesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON instead of TSV
    #[arg(long)]
    pub json: bool,
}

fn parse_amount(value: &str) -> Result<Decimal, String> {
    wallet_fees::utils::parse_decimal(value).ok_or_else(|| format!("invalid decimal: {value}"))
}
