use thiserror::Error;
use wallet_fees::FeeError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fee(#[from] FeeError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code: 2 for insufficient funds, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Fee(FeeError::InsufficientFunds { .. }) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_insufficient_funds() {
        let err = CliError::Fee(FeeError::InsufficientFunds {
            asset_id: "xor#sora".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_other_errors() {
        assert_eq!(CliError::Fee(FeeError::UnknownFeeType("TIERED".into())).exit_code(), 1);
        assert_eq!(CliError::Fee(FeeError::InvalidParameters("FIXED".into())).exit_code(), 1);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(CliError::Json(json).exit_code(), 1);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(CliError::Io(io).exit_code(), 1);
    }
}
