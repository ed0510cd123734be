//! Tests for the financial log repository's pure logic.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::entities::{financial_logs, sea_orm_active_enums::EntryType};
use crate::repositories::financial_log::to_domain;

/// Creates a log model with the given type and amount.
fn mock_log(entry_type: EntryType, amount: Decimal) -> financial_logs::Model {
    financial_logs::Model {
        id: Uuid::now_v7(),
        entry_type,
        amount,
        description: Some("test entry".to_string()),
        category: Some("Testing".to_string()),
        reference: None,
        created_by: Uuid::now_v7(),
        created_at: Utc::now().into(),
    }
}

/// Strategy for generating non-negative decimal amounts.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating entry types.
fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Income), Just(EntryType::Expense)]
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_to_domain_preserves_fields() {
        let model = mock_log(EntryType::Income, dec!(123.45));
        let id = model.id;
        let created_by = model.created_by;

        let domain = to_domain(model);

        assert_eq!(domain.id.into_inner(), id);
        assert_eq!(domain.amount, dec!(123.45));
        assert_eq!(domain.entry_type, quill_core::ledger::EntryType::Income);
        assert_eq!(domain.description.as_deref(), Some("test entry"));
        assert_eq!(domain.category.as_deref(), Some("Testing"));
        assert_eq!(domain.created_by.into_inner(), created_by);
        assert!(domain.reference.is_none());
    }

    #[test]
    fn test_to_domain_maps_reference() {
        let invoice_id = Uuid::now_v7();
        let mut model = mock_log(EntryType::Income, dec!(10));
        model.reference = Some(invoice_id);

        let domain = to_domain(model);
        assert_eq!(domain.reference.map(|r| r.into_inner()), Some(invoice_id));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* model, domain conversion preserves amount and entry type.
    #[test]
    fn prop_to_domain_preserves_amount_and_type(
        entry_type in entry_type_strategy(),
        amount in amount_strategy(),
    ) {
        let model = mock_log(entry_type.clone(), amount);
        let domain = to_domain(model);

        prop_assert_eq!(domain.amount, amount);
        let expected: quill_core::ledger::EntryType = entry_type.into();
        prop_assert_eq!(domain.entry_type, expected);
    }

    /// *For any* set of models, summing converted domain records matches
    /// summing the raw amounts per type (the SQL aggregate's semantics).
    #[test]
    fn prop_domain_sum_matches_raw_sum(
        rows in prop::collection::vec((entry_type_strategy(), amount_strategy()), 0..20),
    ) {
        let logs: Vec<_> = rows
            .iter()
            .map(|(t, a)| to_domain(mock_log(t.clone(), *a)))
            .collect();

        let expected: Decimal = rows
            .iter()
            .filter(|(t, _)| *t == EntryType::Income)
            .map(|(_, a)| *a)
            .sum();

        let actual = quill_core::summary::sum_by_type(
            &logs,
            quill_core::ledger::EntryType::Income,
        );
        prop_assert_eq!(actual, expected);
    }
}
