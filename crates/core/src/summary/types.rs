//! Summary domain types and computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::Invoice;
use crate::ledger::{EntryType, FinancialLog};

/// The dashboard-facing financial summary.
///
/// All fields are always present; empty underlying data reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of all income log entries.
    pub total_income: Decimal,
    /// Sum of all expense log entries.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_profit: Decimal,
    /// Sum of `total_amount` over invoices not yet paid.
    pub pending_invoices_amount: Decimal,
}

impl FinancialSummary {
    /// Combines the three aggregate sums into a summary.
    ///
    /// The net profit is derived here so the identity
    /// `net_profit == total_income - total_expenses` holds by construction.
    #[must_use]
    pub fn compute(
        total_income: Decimal,
        total_expenses: Decimal,
        pending_invoices_amount: Decimal,
    ) -> Self {
        Self {
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
            pending_invoices_amount,
        }
    }

    /// Computes the summary from in-memory domain records.
    ///
    /// The repository layer aggregates in SQL; this form exists for callers
    /// that already hold the records and for tests.
    #[must_use]
    pub fn from_records(logs: &[FinancialLog], invoices: &[Invoice]) -> Self {
        let total_income = sum_by_type(logs, EntryType::Income);
        let total_expenses = sum_by_type(logs, EntryType::Expense);
        let pending = invoices
            .iter()
            .filter(|i| i.is_pending())
            .map(|i| i.total_amount)
            .sum();

        Self::compute(total_income, total_expenses, pending)
    }
}

/// Sums the amounts of all log entries of the given type, 0 when none.
#[must_use]
pub fn sum_by_type(logs: &[FinancialLog], entry_type: EntryType) -> Decimal {
    logs.iter()
        .filter(|l| l.entry_type == entry_type)
        .map(|l| l.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_inputs_read_as_zero() {
        let summary = FinancialSummary::from_records(&[], &[]);
        assert_eq!(
            summary,
            FinancialSummary {
                total_income: dec!(0),
                total_expenses: dec!(0),
                net_profit: dec!(0),
                pending_invoices_amount: dec!(0),
            }
        );
    }

    #[test]
    fn test_compute_derives_net_profit() {
        let summary = FinancialSummary::compute(dec!(500), dec!(200), dec!(0));
        assert_eq!(summary.net_profit, dec!(300));
    }

    #[test]
    fn test_net_profit_can_be_negative() {
        let summary = FinancialSummary::compute(dec!(100), dec!(250), dec!(0));
        assert_eq!(summary.net_profit, dec!(-150));
    }
}
