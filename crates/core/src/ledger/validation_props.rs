//! Property-based tests for financial log validation rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::validation::{parse_amount, validate_amount};

/// Strategy to generate a non-negative amount (>= 0).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    // Generate amounts from 0.00 to 1,000,000.00
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a negative amount.
fn negative_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* non-negative amount, validation SHALL accept it unchanged.
    #[test]
    fn prop_non_negative_amount_accepted(amount in non_negative_amount()) {
        prop_assert_eq!(validate_amount(amount), Ok(amount));
    }

    /// *For any* negative amount, validation SHALL reject it.
    #[test]
    fn prop_negative_amount_rejected(amount in negative_amount()) {
        prop_assert!(validate_amount(amount).is_err());
    }

    /// *For any* non-negative amount, the textual form parses back to the
    /// same value.
    #[test]
    fn prop_parse_amount_round_trips(amount in non_negative_amount()) {
        prop_assert_eq!(parse_amount(&amount.to_string()), Ok(amount));
    }
}
