use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::FeeKind;

/// One fee line an operation may incur, as described by the backend.
///
/// `kind` holds the raw wire tag so that descriptors with a kind this crate
/// does not know still decode; resolution rejects them later with
/// [`FeeError::UnknownFeeType`](crate::FeeError::UnknownFeeType).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeDescriptor {
    pub asset_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub parameters: Vec<String>,
    #[serde(rename = "accountId", default, skip_serializing_if = "Option::is_none")]
    pub payer_account_id: Option<String>,
}

impl FeeDescriptor {
    pub fn new(
        asset_id: impl Into<String>,
        kind: impl Into<String>,
        parameters: Vec<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            kind: kind.into(),
            parameters,
            payer_account_id: None,
        }
    }

    /// Shorthand for a `FIXED` descriptor with a single value.
    pub fn fixed(asset_id: impl Into<String>, value: &str) -> Self {
        Self::new(asset_id, FeeKind::Fixed.as_str(), vec![value.to_string()])
    }

    /// Shorthand for a `FACTOR` descriptor with a single rate.
    pub fn factor(asset_id: impl Into<String>, rate: &str) -> Self {
        Self::new(asset_id, FeeKind::Factor.as_str(), vec![rate.to_string()])
    }

    pub fn with_payer(mut self, account_id: impl Into<String>) -> Self {
        self.payer_account_id = Some(account_id.into());
        self
    }
}

/// A computed fee line attached to a prepared transfer or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeInfo {
    pub asset_id: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}
