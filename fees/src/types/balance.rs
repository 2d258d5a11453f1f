use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;

/// Spendable balance of one asset, as reported by the balance cache.
///
/// The amount is kept in its wire form and parsed on demand; a balance that
/// does not parse is treated as unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub asset_id: String,
    #[serde(rename = "balance")]
    pub available_amount: String,
}

impl BalanceRecord {
    pub fn new(asset_id: impl Into<String>, available_amount: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            available_amount: available_amount.into(),
        }
    }

    /// Parsed balance, or `None` when the reported value is not a decimal.
    pub fn decimal_balance(&self) -> Option<Decimal> {
        parse_decimal(&self.available_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_balance_parses() {
        let b = BalanceRecord::new("xor#sora", "100.25");
        assert_eq!(b.decimal_balance(), Some(dec!(100.25)));
    }

    #[test]
    fn test_decimal_balance_unavailable() {
        assert_eq!(BalanceRecord::new("xor#sora", "").decimal_balance(), None);
        assert_eq!(BalanceRecord::new("xor#sora", "n/a").decimal_balance(), None);
    }
}
