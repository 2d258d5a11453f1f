mod cli;
mod config;
mod error;
mod output;
mod request;

use std::io::{self, BufWriter, Write};

use clap::Parser;
use cli::Command;
use config::CheckConfig;
use error::CliError;
use request::CheckRequest;
use tracing::{info, warn};
use wallet_fees::{
    check_constraints, prepare_fee_lines, prepare_withdraw_fee_lines,
    DefaultFeeCalculationFactory, FeeCalculationFactory, FeeError, FeePreview,
};

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %e, "wallet-check failed");
        std::process::exit(e.exit_code());
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let factory = DefaultFeeCalculationFactory;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match command {
        Command::Fee(args) => {
            let strategy = factory.create_strategy(&args.kind, &args.params)?;
            info!(kind = %strategy.kind(), amount = %args.amount, "computing fee");
            let fee = strategy.calculate(args.amount);
            writeln!(writer, "{fee}")?;
            writer.flush()?;
        }

        Command::Check(args) => {
            let config = CheckConfig::from_env(args.input, false);
            let req = CheckRequest::load(&config)?;
            run_check(&factory, &req, &mut writer)?;
        }

        Command::Lines(args) => {
            let config = CheckConfig::from_env(args.input.input, args.json);
            let req = CheckRequest::load(&config)?;

            let lines = match &req.withdraw_option {
                Some(option) => prepare_withdraw_fee_lines(
                    &factory,
                    &req.principal_asset,
                    option,
                    &req.fees,
                    req.amount,
                )?,
                None => prepare_fee_lines(&factory, &req.principal_asset, &req.fees, req.amount)?,
            };
            let preview = FeePreview::compute(&factory, &req.principal_asset, &req.fees, req.amount)?;
            info!(lines = lines.len(), total = %preview.total, "prepared fee lines");

            output::write_lines(&lines, &preview, config.json, &mut writer)?;
        }
    }

    Ok(())
}

/// Validate `req` and report the outcome to `writer`.
///
/// Insufficient funds are written as a result line and still returned as an
/// error so the process exits with the matching code.
fn run_check<F: FeeCalculationFactory + ?Sized, W: Write>(
    factory: &F,
    req: &CheckRequest,
    writer: &mut W,
) -> Result<(), CliError> {
    info!(asset = %req.principal_asset, amount = %req.amount, fees = req.fees.len(), "checking balances");

    match check_constraints(factory, &req.principal_asset, &req.balances, &req.fees, req.amount) {
        Ok(()) => output::write_check(None, writer),
        Err(FeeError::InsufficientFunds { asset_id }) => {
            warn!(asset = %asset_id, "insufficient funds");
            output::write_check(Some(&asset_id), writer)?;
            Err(FeeError::InsufficientFunds { asset_id }.into())
        }
        Err(e) => Err(e.into()),
    }
}
