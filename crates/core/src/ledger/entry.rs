//! Financial log domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_shared::types::{FinancialLogId, InvoiceId, UserId};

/// Type of financial log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// An immutable record of a single income or expense event.
///
/// Logs are only ever created or deleted; amendment is not supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialLog {
    /// Unique identifier.
    pub id: FinancialLogId,
    /// Whether this is income or an expense.
    pub entry_type: EntryType,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: Option<String>,
    /// Free-text category (e.g. "Invoice Payment").
    pub category: Option<String>,
    /// Back-reference to the invoice that caused this entry, if any.
    pub reference: Option<InvoiceId>,
    /// The acting principal who recorded the entry. Always present: no
    /// anonymous ledger entries.
    pub created_by: UserId,
    /// When the entry was recorded. Immutable after insertion.
    pub created_at: DateTime<Utc>,
}

impl FinancialLog {
    /// Returns the signed amount (positive for income, negative for expense).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Income => self.amount,
            EntryType::Expense => -self.amount,
        }
    }
}
