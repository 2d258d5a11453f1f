//! Balance sufficiency checks for transfers and withdrawals.
//!
//! Fees denominated in the principal asset are added on top of the amount and
//! checked together; fees in any other asset are checked one by one against
//! their own balance.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{FeeError, Result};
use crate::fee::FeeCalculationFactory;
use crate::types::{BalanceRecord, FeeDescriptor};
use crate::utils::find_balance;

/// Compute the fee `fee` charges on `amount` of `asset_id`.
pub fn calculate_fee<F: FeeCalculationFactory + ?Sized>(
    factory: &F,
    asset_id: &str,
    fee: &FeeDescriptor,
    amount: Decimal,
) -> Result<Decimal> {
    let strategy = factory.create_transfer_fee_strategy(asset_id, fee)?;
    Ok(strategy.calculate(amount))
}

/// Check that `amount` of `asset_id` is covered by its balance.
///
/// # Errors
///
/// Returns `FeeError::InsufficientFunds` when the balance is missing, does not
/// parse, or is lower than `amount`.
pub fn check_amount(amount: Decimal, asset_id: &str, balances: &[BalanceRecord]) -> Result<()> {
    let insufficient = || FeeError::InsufficientFunds {
        asset_id: asset_id.to_string(),
    };

    let balance = find_balance(balances, asset_id)
        .and_then(BalanceRecord::decimal_balance)
        .ok_or_else(insufficient)?;

    trace!(asset_id, %amount, %balance, "checking amount");

    if amount > balance {
        return Err(insufficient());
    }

    Ok(())
}

/// Validate that a transfer of `amount` in `principal_asset` and all of its
/// `fees` fit into `balances`.
///
/// Stops at the first failure: the principal asset group first, then each
/// other-asset fee in input order. When no fee is charged in the principal
/// asset, the bare amount is not checked against the principal balance.
pub fn check_constraints<F: FeeCalculationFactory + ?Sized>(
    factory: &F,
    principal_asset: &str,
    balances: &[BalanceRecord],
    fees: &[FeeDescriptor],
    amount: Decimal,
) -> Result<()> {
    let (main_fees, other_fees): (Vec<&FeeDescriptor>, Vec<&FeeDescriptor>) =
        fees.iter().partition(|f| f.asset_id == principal_asset);

    if !main_fees.is_empty() {
        let mut total = amount;
        for fee in &main_fees {
            let fee_amount = calculate_fee(factory, principal_asset, fee, amount)?;
            total = total.saturating_add(fee_amount);
        }

        debug!(principal_asset, %amount, %total, main_fees = main_fees.len(), "principal total");
        check_amount(total, principal_asset, balances)?;
    }

    for fee in other_fees {
        let fee_amount = calculate_fee(factory, principal_asset, fee, amount)?;
        debug!(fee_asset = %fee.asset_id, %fee_amount, "other-asset fee");
        check_amount(fee_amount, &fee.asset_id, balances)?;
    }

    Ok(())
}

/// [`check_constraints`] bound to a factory, for callers that validate many
/// amounts against the same resolution rules.
#[derive(Debug, Clone, Default)]
pub struct AmountConstraintsChecker<F> {
    factory: F,
}

impl<F: FeeCalculationFactory> AmountConstraintsChecker<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn check(
        &self,
        principal_asset: &str,
        balances: &[BalanceRecord],
        fees: &[FeeDescriptor],
        amount: Decimal,
    ) -> Result<()> {
        check_constraints(&self.factory, principal_asset, balances, fees, amount)
    }
}
