//! Property-based tests for summary aggregation.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use quill_shared::types::{FinancialLogId, InvoiceId, OrderId, UserId};

use crate::invoice::{Invoice, InvoiceStatus};
use crate::ledger::{EntryType, FinancialLog};

use super::types::{sum_by_type, FinancialSummary};

/// Strategy for generating non-negative amounts.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating entry types.
fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Income), Just(EntryType::Expense)]
}

/// Strategy for generating invoice statuses.
fn status_strategy() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Draft),
        Just(InvoiceStatus::Sent),
        Just(InvoiceStatus::Paid),
        Just(InvoiceStatus::Overdue),
    ]
}

fn make_log(entry_type: EntryType, amount: Decimal) -> FinancialLog {
    FinancialLog {
        id: FinancialLogId::new(),
        entry_type,
        amount,
        description: None,
        category: None,
        reference: None,
        created_by: UserId::new(),
        created_at: Utc::now(),
    }
}

fn make_invoice(status: InvoiceStatus, total_amount: Decimal) -> Invoice {
    let order_id = OrderId::new();
    Invoice {
        id: InvoiceId::new(),
        order_id,
        total_amount,
        status,
        invoice_date: Utc::now(),
        due_date: None,
        sent_at: None,
        paid_at: None,
        pdf_url: Invoice::derive_pdf_url(order_id),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* sequence of log entries, `sum_by_type` equals the
    /// arithmetic sum of amounts of that type, and 0 when none exist.
    #[test]
    fn prop_sum_by_type_matches_arithmetic_sum(
        entries in prop::collection::vec((entry_type_strategy(), amount_strategy()), 0..20),
    ) {
        let logs: Vec<FinancialLog> = entries
            .iter()
            .map(|(t, a)| make_log(*t, *a))
            .collect();

        let expected_income: Decimal = entries
            .iter()
            .filter(|(t, _)| *t == EntryType::Income)
            .map(|(_, a)| *a)
            .sum();
        let expected_expense: Decimal = entries
            .iter()
            .filter(|(t, _)| *t == EntryType::Expense)
            .map(|(_, a)| *a)
            .sum();

        prop_assert_eq!(sum_by_type(&logs, EntryType::Income), expected_income);
        prop_assert_eq!(sum_by_type(&logs, EntryType::Expense), expected_expense);
    }

    /// *For any* ledger contents, `net_profit == total_income - total_expenses`.
    #[test]
    fn prop_net_profit_identity(
        income in amount_strategy(),
        expenses in amount_strategy(),
        pending in amount_strategy(),
    ) {
        let summary = FinancialSummary::compute(income, expenses, pending);
        prop_assert_eq!(summary.net_profit, summary.total_income - summary.total_expenses);
    }

    /// *For any* set of invoices, the pending amount counts exactly the
    /// non-Paid ones.
    #[test]
    fn prop_pending_excludes_paid(
        invoices in prop::collection::vec((status_strategy(), amount_strategy()), 0..20),
    ) {
        let records: Vec<Invoice> = invoices
            .iter()
            .map(|(s, a)| make_invoice(*s, *a))
            .collect();

        let expected: Decimal = invoices
            .iter()
            .filter(|(s, _)| *s != InvoiceStatus::Paid)
            .map(|(_, a)| *a)
            .sum();

        let summary = FinancialSummary::from_records(&[], &records);
        prop_assert_eq!(summary.pending_invoices_amount, expected);
    }
}
