use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use wallet_fees::{BalanceRecord, FeeDescriptor, WithdrawOption};

use crate::config::CheckConfig;
use crate::error::CliError;

/// A transfer or withdrawal to validate.
///
/// ```json
/// {
///   "principalAsset": "xor#sora",
///   "amount": "90",
///   "balances": [{"assetId": "xor#sora", "balance": "100"}],
///   "fees": [{"assetId": "xor#sora", "type": "FIXED", "parameters": ["5"]}]
/// }
/// ```
///
/// A `withdrawOption` turns the request into a withdrawal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub principal_asset: String,
    pub amount: Decimal,
    #[serde(default)]
    pub balances: Vec<BalanceRecord>,
    #[serde(default)]
    pub fees: Vec<FeeDescriptor>,
    #[serde(default)]
    pub withdraw_option: Option<WithdrawOption>,
}

impl CheckRequest {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CliError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load from the configured file, or stdin when none is set.
    pub fn load(config: &CheckConfig) -> Result<Self, CliError> {
        match &config.input {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading request");
                let file = std::fs::File::open(path)?;
                Self::from_reader(std::io::BufReader::new(file))
            }
            None => {
                tracing::debug!("reading request from stdin");
                Self::from_reader(std::io::stdin().lock())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_transfer_request() {
        let json = r#"{
            "principalAsset": "xor#sora",
            "amount": "90",
            "balances": [{"assetId": "xor#sora", "balance": "100"}],
            "fees": [{"assetId": "xor#sora", "type": "FIXED", "parameters": ["5"]}]
        }"#;

        let req = CheckRequest::from_reader(json.as_bytes()).unwrap();
        assert_eq!(req.principal_asset, "xor#sora");
        assert_eq!(req.amount, dec!(90));
        assert_eq!(req.balances.len(), 1);
        assert_eq!(req.fees.len(), 1);
        assert!(req.withdraw_option.is_none());
    }

    #[test]
    fn test_decode_rejects_missing_amount() {
        let json = r#"{"principalAsset": "xor#sora"}"#;
        let err = CheckRequest::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
