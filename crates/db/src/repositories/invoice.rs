//! Invoice repository and lifecycle manager.
//!
//! Besides plain lookups, this repository enforces the invoice lifecycle:
//! creation builds the backing order and the invoice in one database
//! transaction, and payment verification updates the status and writes the
//! income log entry in one database transaction. No reader can observe a
//! Paid invoice without its ledger entry, or vice versa.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use quill_core::invoice::{
    check_transition, Invoice, InvoiceStatus as DomainStatus, LifecycleError, TransitionPolicy,
};
use quill_core::ledger::{validate_amount, LedgerError};
use quill_shared::config::InvoicingConfig;
use quill_shared::error::AppError;
use quill_shared::types::{FinancialLogId, InvoiceId, OrderId};

use crate::entities::{
    financial_logs, invoices, orders,
    sea_orm_active_enums::{EntryType, InvoiceStatus, OrderStatus},
};

/// Error types for invoice operations.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    NotFound(Uuid),

    /// No invoice exists for the given order.
    #[error("No invoice for order: {0}")]
    OrderNotFound(Uuid),

    /// Input failed domain validation.
    #[error("Invalid invoice input: {0}")]
    Validation(#[from] LedgerError),

    /// The requested status transition is not allowed.
    #[error(transparent)]
    Transition(#[from] LifecycleError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::NotFound(id) => Self::NotFound(format!("invoice {id}")),
            InvoiceError::OrderNotFound(id) => Self::NotFound(format!("invoice for order {id}")),
            InvoiceError::Validation(e) => Self::Validation(e.to_string()),
            InvoiceError::Transition(e) => Self::Conflict(e.to_string()),
            InvoiceError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating an invoice.
#[derive(Debug, Clone)]
pub struct CreateInvoiceInput {
    /// The user the backing order is created for.
    pub user_id: Uuid,
    /// Non-negative amount owed.
    pub total_amount: Decimal,
    /// Optional payment deadline.
    pub due_date: Option<chrono::DateTime<Utc>>,
}

/// Invoice repository and lifecycle manager.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
    policy: TransitionPolicy,
}

impl InvoiceRepository {
    /// Creates a new invoice repository with the permissive transition
    /// policy (the historical behavior).
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            policy: TransitionPolicy::Permissive,
        }
    }

    /// Creates a new invoice repository with an explicit transition policy.
    #[must_use]
    pub const fn with_policy(db: DatabaseConnection, policy: TransitionPolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a new invoice repository honoring the configured transition
    /// guarding.
    #[must_use]
    pub fn from_config(db: DatabaseConnection, config: &InvoicingConfig) -> Self {
        let policy = if config.strict_transitions {
            TransitionPolicy::Strict
        } else {
            TransitionPolicy::Permissive
        };
        Self { db, policy }
    }

    /// Creates an order and its invoice.
    ///
    /// The order is created with status Completed and the invoice in Draft.
    /// Both inserts run in one database transaction; a failure leaves
    /// neither row behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or a write fails.
    pub async fn create_invoice(
        &self,
        input: CreateInvoiceInput,
    ) -> Result<Invoice, InvoiceError> {
        validate_amount(input.total_amount)?;

        let now = Utc::now();
        let order_id = OrderId::new();
        let invoice_id = InvoiceId::new();

        let txn = self.db.begin().await?;

        let order = orders::ActiveModel {
            id: Set(order_id.into_inner()),
            user_id: Set(input.user_id),
            status: Set(OrderStatus::Completed),
            order_date: Set(now.into()),
            created_at: Set(now.into()),
        };
        order.insert(&txn).await?;

        let invoice = invoices::ActiveModel {
            id: Set(invoice_id.into_inner()),
            order_id: Set(order_id.into_inner()),
            total_amount: Set(input.total_amount),
            status: Set(InvoiceStatus::Draft),
            invoice_date: Set(now.into()),
            due_date: Set(input.due_date.map(Into::into)),
            sent_at: Set(None),
            paid_at: Set(None),
            pdf_url: Set(Invoice::derive_pdf_url(order_id)),
        };
        let inserted = invoice.insert(&txn).await?;

        txn.commit().await?;
        tracing::info!(invoice = %invoice_id, order = %order_id, "invoice created");

        Ok(to_domain(inserted))
    }

    /// Marks an invoice as sent and stamps `sent_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the invoice does not exist, or a transition
    /// error under the strict policy.
    pub async fn send_invoice(&self, id: Uuid) -> Result<Invoice, InvoiceError> {
        let invoice = self.find_invoice(id).await?;

        check_transition(self.policy, invoice.status.clone().into(), DomainStatus::Sent)?;

        let mut active: invoices::ActiveModel = invoice.into();
        active.status = Set(InvoiceStatus::Sent);
        active.sent_at = Set(Some(Utc::now().into()));

        let updated = active.update(&self.db).await?;
        tracing::info!(invoice = %id, "invoice sent");

        Ok(to_domain(updated))
    }

    /// Verifies payment for an invoice.
    ///
    /// Sets the status to Paid, stamps `paid_at`, and records an income log
    /// entry for the invoice total, attributed to `verified_by`. The status
    /// update and the ledger write run in one database transaction and
    /// commit or roll back together.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the invoice does not exist, a transition error
    /// under the strict policy, or a database error (after rollback).
    pub async fn verify_payment(
        &self,
        id: Uuid,
        verified_by: Uuid,
    ) -> Result<Invoice, InvoiceError> {
        let invoice = self.find_invoice(id).await?;

        check_transition(self.policy, invoice.status.clone().into(), DomainStatus::Paid)?;

        let now = Utc::now();
        let total_amount = invoice.total_amount;

        let txn = self.db.begin().await?;

        let mut active: invoices::ActiveModel = invoice.into();
        active.status = Set(InvoiceStatus::Paid);
        active.paid_at = Set(Some(now.into()));
        let updated = active.update(&txn).await?;

        let log = financial_logs::ActiveModel {
            id: Set(FinancialLogId::new().into_inner()),
            entry_type: Set(EntryType::Income),
            amount: Set(total_amount),
            description: Set(Some(format!("Payment for invoice {id}"))),
            category: Set(Some("Invoice Payment".to_string())),
            reference: Set(Some(id)),
            created_by: Set(verified_by),
            created_at: Set(now.into()),
        };
        log.insert(&txn).await?;

        txn.commit().await?;
        tracing::info!(invoice = %id, %total_amount, "payment verified");

        Ok(to_domain(updated))
    }

    /// Lists all invoices, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_all(&self) -> Result<Vec<Invoice>, InvoiceError> {
        let models = invoices::Entity::find()
            .order_by_desc(invoices::Column::InvoiceDate)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    /// Looks up the invoice backing the given order.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` if no invoice references the order.
    pub async fn get_by_order(&self, order_id: Uuid) -> Result<Invoice, InvoiceError> {
        let model = invoices::Entity::find()
            .filter(invoices::Column::OrderId.eq(order_id))
            .one(&self.db)
            .await?
            .ok_or(InvoiceError::OrderNotFound(order_id))?;

        Ok(to_domain(model))
    }

    /// Fetches an invoice model or fails with `NotFound`.
    async fn find_invoice(&self, id: Uuid) -> Result<invoices::Model, InvoiceError> {
        invoices::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(InvoiceError::NotFound(id))
    }
}

/// Converts a database model into the domain representation.
pub(crate) fn to_domain(model: invoices::Model) -> Invoice {
    Invoice {
        id: InvoiceId::from_uuid(model.id),
        order_id: OrderId::from_uuid(model.order_id),
        total_amount: model.total_amount,
        status: model.status.into(),
        invoice_date: model.invoice_date.into(),
        due_date: model.due_date.map(Into::into),
        sent_at: model.sent_at.map(Into::into),
        paid_at: model.paid_at.map(Into::into),
        pdf_url: model.pdf_url,
    }
}
