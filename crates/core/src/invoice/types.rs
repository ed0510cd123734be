//! Invoice domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_shared::types::{InvoiceId, OrderId};

/// Base URL for generated invoice documents.
pub const PDF_BASE_URL: &str = "https://invoices.example.com";

/// Invoice status in the billing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice has been created but not sent to the customer.
    Draft,
    /// Invoice has been sent to the customer.
    Sent,
    /// Payment has been verified. Terminal.
    Paid,
    /// The due date passed without payment. Set by an external process.
    Overdue,
}

impl InvoiceStatus {
    /// Returns true if an invoice in this status counts toward the pending
    /// amount (everything except `Paid`).
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Draft | Self::Sent | Self::Overdue)
    }
}

/// A billing document tied to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// The order this invoice bills for.
    pub order_id: OrderId,
    /// Non-negative amount owed.
    pub total_amount: Decimal,
    /// Current lifecycle status.
    pub status: InvoiceStatus,
    /// When the invoice was issued.
    pub invoice_date: DateTime<Utc>,
    /// Payment deadline, if one was set.
    pub due_date: Option<DateTime<Utc>>,
    /// Set when the invoice is sent.
    pub sent_at: Option<DateTime<Utc>>,
    /// Set when payment is verified.
    pub paid_at: Option<DateTime<Utc>>,
    /// Opaque reference to the generated document. Not interpreted here.
    pub pdf_url: String,
}

impl Invoice {
    /// Derives the document URL for an invoice backing the given order.
    #[must_use]
    pub fn derive_pdf_url(order_id: OrderId) -> String {
        format!("{PDF_BASE_URL}/manual_invoice_{order_id}.pdf")
    }

    /// Returns true if this invoice counts toward the pending amount.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}
