//! Fee lines attached to prepared transactions, and the fee preview shown
//! while an amount is being entered.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::constraints::calculate_fee;
use crate::error::Result;
use crate::fee::{FeeCalculationFactory, FeeStrategy};
use crate::types::{FeeDescriptor, FeeInfo, WithdrawOption};

fn to_line(fee: &FeeDescriptor, strategy: FeeStrategy, amount: Decimal) -> Option<FeeInfo> {
    let fee_amount = strategy.calculate(amount);
    if fee_amount <= Decimal::ZERO {
        return None;
    }

    Some(FeeInfo {
        asset_id: fee.asset_id.clone(),
        amount: fee_amount,
        account_id: fee.payer_account_id.clone(),
    })
}

/// Fee lines for a transfer of `amount` in `asset_id`, in descriptor order.
/// Fees that come out as zero are left out.
pub fn prepare_fee_lines<F: FeeCalculationFactory + ?Sized>(
    factory: &F,
    asset_id: &str,
    fees: &[FeeDescriptor],
    amount: Decimal,
) -> Result<Vec<FeeInfo>> {
    let mut lines = Vec::with_capacity(fees.len());
    for fee in fees {
        let strategy = factory.create_transfer_fee_strategy(asset_id, fee)?;
        lines.extend(to_line(fee, strategy, amount));
    }
    Ok(lines)
}

/// Same as [`prepare_fee_lines`], resolving through the withdraw entry point.
pub fn prepare_withdraw_fee_lines<F: FeeCalculationFactory + ?Sized>(
    factory: &F,
    asset_id: &str,
    option: &WithdrawOption,
    fees: &[FeeDescriptor],
    amount: Decimal,
) -> Result<Vec<FeeInfo>> {
    let mut lines = Vec::with_capacity(fees.len());
    for fee in fees {
        let strategy = factory.create_withdraw_fee_strategy(asset_id, option, fee)?;
        lines.extend(to_line(fee, strategy, amount));
    }
    Ok(lines)
}

/// First fee charged in the principal asset.
pub fn main_fee<'a>(principal_asset: &str, fees: &'a [FeeDescriptor]) -> Option<&'a FeeDescriptor> {
    fees.iter().find(|f| f.asset_id == principal_asset)
}

/// Principal-asset fee and resulting total for an entered amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePreview {
    pub amount: Decimal,
    pub main_fee: Option<Decimal>,
    pub total: Decimal,
}

impl FeePreview {
    pub fn compute<F: FeeCalculationFactory + ?Sized>(
        factory: &F,
        principal_asset: &str,
        fees: &[FeeDescriptor],
        amount: Decimal,
    ) -> Result<Self> {
        let main_fee = main_fee(principal_asset, fees)
            .map(|fee| calculate_fee(factory, principal_asset, fee, amount))
            .transpose()?;

        let total = amount.saturating_add(main_fee.unwrap_or_default());

        Ok(Self {
            amount,
            main_fee,
            total,
        })
    }
}
