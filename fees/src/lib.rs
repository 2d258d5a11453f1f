//! Fee calculation and balance sufficiency checks for wallet transfers and
//! withdrawals.

pub mod constraints;
pub mod error;
pub mod fee;
pub mod lines;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

pub use error::{FeeError, Result};

// Strategies + resolution
pub use fee::{DefaultFeeCalculationFactory, FeeCalculationFactory, FeeStrategy};

// Balance checks
pub use constraints::{calculate_fee, check_amount, check_constraints, AmountConstraintsChecker};

// Fee lines + preview
pub use lines::{main_fee, prepare_fee_lines, prepare_withdraw_fee_lines, FeePreview};

// Model
pub use types::{
    BalanceRecord, FeeDescriptor, FeeInfo, FeeKind, TransferMetadata, WithdrawMetadata,
    WithdrawOption,
};
