use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("unknown fee type: {0}")]
    UnknownFeeType(String),

    #[error("invalid parameters for {0} fee")]
    InvalidParameters(String),

    #[error("insufficient funds: {asset_id}")]
    InsufficientFunds { asset_id: String },
}

impl FeeError {
    /// Asset whose balance could not cover the checked amount, if this is a
    /// balance failure.
    pub fn insufficient_asset(&self) -> Option<&str> {
        match self {
            FeeError::InsufficientFunds { asset_id } => Some(asset_id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeeError>;
