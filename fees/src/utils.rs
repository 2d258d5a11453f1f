use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::BalanceRecord;

/// Parse a decimal string in plain (`"0.25"`) or scientific (`"1e+6"`)
/// notation.
///
/// Values that `Decimal` can only hold after rounding (more than 28
/// significant fractional digits) are rejected instead of truncated.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    match value.split_once(|c: char| c == 'e' || c == 'E') {
        Some((base, _)) => {
            parse_exact(base)?;
            Decimal::from_scientific(value).ok()
        }
        None => parse_exact(value),
    }
}

fn parse_exact(value: &str) -> Option<Decimal> {
    let parsed = Decimal::from_str(value).ok()?;
    let fraction_digits = value
        .split_once('.')
        .map(|(_, frac)| frac.trim_end_matches('0').len())
        .unwrap_or(0);

    if parsed.normalize().scale() as usize != fraction_digits {
        return None;
    }
    Some(parsed)
}

/// Parse every string as a decimal. All-or-nothing: a single unparsable
/// entry yields `None` for the whole list.
pub fn parse_decimals(values: &[String]) -> Option<Vec<Decimal>> {
    values.iter().map(|v| parse_decimal(v)).collect()
}

/// Find the balance record for an asset.
pub fn find_balance<'a>(balances: &'a [BalanceRecord], asset_id: &str) -> Option<&'a BalanceRecord> {
    balances.iter().find(|b| b.asset_id == asset_id)
}
