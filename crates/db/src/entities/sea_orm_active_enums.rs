//! Active enums mapping Postgres enum types to Rust.
//!
//! Conversions to and from the `quill-core` domain enums live here so
//! repositories can hand out domain types without leaking ORM details.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Type of financial log entry (`entry_type` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_type")]
pub enum EntryType {
    /// Money coming in.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Invoice lifecycle status (`invoice_status` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_status")]
pub enum InvoiceStatus {
    /// Created but not sent.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Sent to the customer.
    #[sea_orm(string_value = "sent")]
    Sent,
    /// Payment verified. Terminal.
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Due date passed without payment.
    #[sea_orm(string_value = "overdue")]
    Overdue,
}

/// Order status (`order_status` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
pub enum OrderStatus {
    /// Order has been placed but not fulfilled.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Order has been fulfilled.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Order was cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl From<quill_core::ledger::EntryType> for EntryType {
    fn from(value: quill_core::ledger::EntryType) -> Self {
        match value {
            quill_core::ledger::EntryType::Income => Self::Income,
            quill_core::ledger::EntryType::Expense => Self::Expense,
        }
    }
}

impl From<EntryType> for quill_core::ledger::EntryType {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Income => Self::Income,
            EntryType::Expense => Self::Expense,
        }
    }
}

impl From<quill_core::invoice::InvoiceStatus> for InvoiceStatus {
    fn from(value: quill_core::invoice::InvoiceStatus) -> Self {
        match value {
            quill_core::invoice::InvoiceStatus::Draft => Self::Draft,
            quill_core::invoice::InvoiceStatus::Sent => Self::Sent,
            quill_core::invoice::InvoiceStatus::Paid => Self::Paid,
            quill_core::invoice::InvoiceStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<InvoiceStatus> for quill_core::invoice::InvoiceStatus {
    fn from(value: InvoiceStatus) -> Self {
        match value {
            InvoiceStatus::Draft => Self::Draft,
            InvoiceStatus::Sent => Self::Sent,
            InvoiceStatus::Paid => Self::Paid,
            InvoiceStatus::Overdue => Self::Overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_status_round_trips_through_domain() {
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
        ] {
            let domain: quill_core::invoice::InvoiceStatus = status.clone().into();
            let back: InvoiceStatus = domain.into();
            assert_eq!(status, back);
        }
    }

    #[test]
    fn test_entry_type_round_trips_through_domain() {
        for entry_type in [EntryType::Income, EntryType::Expense] {
            let domain: quill_core::ledger::EntryType = entry_type.clone().into();
            let back: EntryType = domain.into();
            assert_eq!(entry_type, back);
        }
    }
}
