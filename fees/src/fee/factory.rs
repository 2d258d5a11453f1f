use rust_decimal::Decimal;
use tracing::trace;

use super::strategy::FeeStrategy;
use crate::error::{FeeError, Result};
use crate::types::{FeeDescriptor, FeeKind, WithdrawOption};
use crate::utils::parse_decimals;

/// Resolves fee descriptors into calculation strategies.
///
/// Every method has a default implementation; hosts override the transfer or
/// withdraw entry points when they need asset- or channel-specific rules.
pub trait FeeCalculationFactory {
    /// Strategy for a fee charged on a transfer of `asset_id`.
    fn create_transfer_fee_strategy(
        &self,
        asset_id: &str,
        fee: &FeeDescriptor,
    ) -> Result<FeeStrategy> {
        trace!(asset_id, fee_asset = %fee.asset_id, kind = %fee.kind, "resolving transfer fee");
        self.create_strategy(&fee.kind, &fee.parameters)
    }

    /// Strategy for a fee charged on a withdrawal of `asset_id` through `option`.
    fn create_withdraw_fee_strategy(
        &self,
        asset_id: &str,
        option: &WithdrawOption,
        fee: &FeeDescriptor,
    ) -> Result<FeeStrategy> {
        trace!(
            asset_id,
            option = %option.identifier,
            fee_asset = %fee.asset_id,
            kind = %fee.kind,
            "resolving withdraw fee"
        );
        self.create_strategy(&fee.kind, &fee.parameters)
    }

    /// Resolve a kind tag and its raw parameters.
    ///
    /// # Errors
    ///
    /// Returns `FeeError::UnknownFeeType` for an unrecognised tag and
    /// `FeeError::InvalidParameters` when the parameter list is empty or any
    /// entry fails to parse.
    fn create_strategy(&self, kind: &str, parameters: &[String]) -> Result<FeeStrategy> {
        let decimals: Vec<Decimal> = parse_decimals(parameters).unwrap_or_default();
        let kind = FeeKind::from_tag(kind).ok_or_else(|| FeeError::UnknownFeeType(kind.to_string()))?;
        FeeStrategy::from_parameters(kind, &decimals)
    }
}

/// Factory with the stock `FIXED`/`FACTOR` resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFeeCalculationFactory;

impl FeeCalculationFactory for DefaultFeeCalculationFactory {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample_option() -> WithdrawOption {
        WithdrawOption {
            identifier: "eth-withdraw".into(),
            symbol: "ETH".into(),
            short_title: "Withdraw to Ethereum".into(),
            long_title: "Send to my Ethereum wallet".into(),
            details: "Ethereum wallet address".into(),
        }
    }

    // ---- create_strategy ----

    #[test]
    fn test_fixed_valid_values() {
        let factory = DefaultFeeCalculationFactory;
        for (raw, expected) in [("0", dec!(0)), ("10", dec!(10)), ("1e+6", dec!(1000000))] {
            let s = factory.create_strategy("FIXED", &params(&[raw])).unwrap();
            assert_eq!(s.calculate(dec!(1.2)), expected, "value {raw}");
        }
    }

    #[test]
    fn test_factor_valid_values() {
        let factory = DefaultFeeCalculationFactory;
        for (raw, rate) in [("0", dec!(0)), ("10", dec!(10)), ("1e+6", dec!(1000000))] {
            let s = factory.create_strategy("FACTOR", &params(&[raw])).unwrap();
            assert_eq!(s.calculate(dec!(1.2)), dec!(1.2) * rate, "rate {raw}");
        }
    }

    #[test]
    fn test_empty_parameters() {
        let factory = DefaultFeeCalculationFactory;
        assert_eq!(
            factory.create_strategy("FIXED", &[]).unwrap_err(),
            FeeError::InvalidParameters("FIXED".into())
        );
        assert_eq!(
            factory.create_strategy("FACTOR", &[]).unwrap_err(),
            FeeError::InvalidParameters("FACTOR".into())
        );
    }

    #[test]
    fn test_one_bad_parameter_invalidates_list() {
        let factory = DefaultFeeCalculationFactory;
        let err = factory
            .create_strategy("FIXED", &params(&["5", "five"]))
            .unwrap_err();
        assert!(matches!(err, FeeError::InvalidParameters(_)));
    }

    #[test]
    fn test_rate_beyond_decimal_precision_is_invalid() {
        let factory = DefaultFeeCalculationFactory;
        let err = factory
            .create_strategy("FACTOR", &params(&["0.00000000000000000000000000001234"]))
            .unwrap_err();
        assert_eq!(err, FeeError::InvalidParameters("FACTOR".into()));

        let err = factory.create_strategy("FIXED", &params(&["1e-100"])).unwrap_err();
        assert_eq!(err, FeeError::InvalidParameters("FIXED".into()));
    }

    #[test]
    fn test_unknown_kind() {
        let factory = DefaultFeeCalculationFactory;
        for kind in ["PERCENT", "fixed", ""] {
            let err = factory.create_strategy(kind, &params(&["1"])).unwrap_err();
            assert_eq!(err, FeeError::UnknownFeeType(kind.to_string()));
        }
    }

    #[test]
    fn test_unknown_kind_reported_before_bad_parameters() {
        let factory = DefaultFeeCalculationFactory;
        let err = factory.create_strategy("TIERED", &[]).unwrap_err();
        assert!(matches!(err, FeeError::UnknownFeeType(_)));
    }

    // ---- transfer / withdraw entry points ----

    #[test]
    fn test_transfer_and_withdraw_resolve_identically() {
        let factory = DefaultFeeCalculationFactory;
        let fee = FeeDescriptor::factor("xor#sora", "0.01");

        let transfer = factory.create_transfer_fee_strategy("xor#sora", &fee).unwrap();
        let withdraw = factory
            .create_withdraw_fee_strategy("xor#sora", &sample_option(), &fee)
            .unwrap();

        assert_eq!(transfer, withdraw);
        assert_eq!(transfer.calculate(dec!(250)), dec!(2.5));
    }

    #[test]
    fn test_withdraw_invalid_parameters() {
        let factory = DefaultFeeCalculationFactory;
        let fee = FeeDescriptor::new("xor#sora", "FIXED", vec![]);
        let err = factory
            .create_withdraw_fee_strategy("xor#sora", &sample_option(), &fee)
            .unwrap_err();
        assert_eq!(err, FeeError::InvalidParameters("FIXED".into()));
    }

    // ---- overriding ----

    struct FlatWithdrawFactory;

    impl FeeCalculationFactory for FlatWithdrawFactory {
        fn create_withdraw_fee_strategy(
            &self,
            _asset_id: &str,
            _option: &WithdrawOption,
            _fee: &FeeDescriptor,
        ) -> Result<FeeStrategy> {
            Ok(FeeStrategy::Fixed { value: dec!(1) })
        }
    }

    #[test]
    fn test_override_only_affects_withdraw() {
        let factory = FlatWithdrawFactory;
        let fee = FeeDescriptor::factor("xor#sora", "0.5");

        let transfer = factory.create_transfer_fee_strategy("xor#sora", &fee).unwrap();
        assert_eq!(transfer.calculate(dec!(10)), dec!(5));

        let withdraw = factory
            .create_withdraw_fee_strategy("xor#sora", &sample_option(), &fee)
            .unwrap();
        assert_eq!(withdraw.calculate(dec!(10)), dec!(1));
    }
}
