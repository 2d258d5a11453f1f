use serde::{Deserialize, Serialize};

use super::fee::FeeDescriptor;

/// Server-provided metadata for a transfer in a given asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferMetadata {
    #[serde(default)]
    pub fees: Vec<FeeDescriptor>,
}

/// Server-provided metadata for a withdrawal through a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawMetadata {
    pub provider_account_id: String,
    #[serde(default)]
    pub fees: Vec<FeeDescriptor>,
}

/// A withdrawal channel offered for an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawOption {
    pub identifier: String,
    pub symbol: String,
    pub short_title: String,
    pub long_title: String,
    pub details: String,
}
