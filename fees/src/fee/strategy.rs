use rust_decimal::Decimal;

use crate::error::{FeeError, Result};
use crate::types::FeeKind;

/// A resolved fee calculation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStrategy {
    /// Charges `value` regardless of the amount.
    Fixed { value: Decimal },
    /// Charges `amount * rate`.
    Factor { rate: Decimal },
}

impl FeeStrategy {
    /// Build a strategy of `kind` from already parsed parameters.
    ///
    /// # Errors
    ///
    /// Returns `FeeError::InvalidParameters` if `parameters` is empty.
    pub fn from_parameters(kind: FeeKind, parameters: &[Decimal]) -> Result<Self> {
        let first = parameters
            .first()
            .copied()
            .ok_or_else(|| FeeError::InvalidParameters(kind.to_string()))?;

        Ok(match kind {
            FeeKind::Fixed => FeeStrategy::Fixed { value: first },
            FeeKind::Factor => FeeStrategy::Factor { rate: first },
        })
    }

    pub fn kind(&self) -> FeeKind {
        match self {
            FeeStrategy::Fixed { .. } => FeeKind::Fixed,
            FeeStrategy::Factor { .. } => FeeKind::Factor,
        }
    }

    /// Fee charged for `amount`. Overflow saturates at the decimal bounds.
    pub fn calculate(&self, amount: Decimal) -> Decimal {
        match *self {
            FeeStrategy::Fixed { value } => value,
            FeeStrategy::Factor { rate } => amount.saturating_mul(rate),
        }
    }
}
