//! Financial log repository for ledger database operations.
//!
//! Log entries are immutable: this repository exposes creation, deletion,
//! listing, and aggregation, never an update.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use quill_core::ledger::{validate_amount, FinancialLog, LedgerError};
use quill_shared::error::AppError;
use quill_shared::types::{FinancialLogId, InvoiceId, UserId};

use crate::entities::{financial_logs, sea_orm_active_enums::EntryType};

/// Error types for financial log operations.
#[derive(Debug, thiserror::Error)]
pub enum FinancialLogError {
    /// Financial log not found.
    #[error("Financial log not found: {0}")]
    NotFound(Uuid),

    /// Input failed domain validation.
    #[error("Invalid financial log input: {0}")]
    Validation(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<FinancialLogError> for AppError {
    fn from(err: FinancialLogError) -> Self {
        match err {
            FinancialLogError::NotFound(id) => Self::NotFound(format!("financial log {id}")),
            FinancialLogError::Validation(e) => Self::Validation(e.to_string()),
            FinancialLogError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a financial log entry.
#[derive(Debug, Clone)]
pub struct CreateFinancialLogInput {
    /// Whether this is income or an expense.
    pub entry_type: EntryType,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: Option<String>,
    /// Free-text category.
    pub category: Option<String>,
    /// Back-reference to a causal invoice, if any.
    pub reference: Option<Uuid>,
    /// The acting principal. Required: every entry must be attributable.
    pub created_by: Uuid,
}

/// Financial log repository for ledger entry operations.
#[derive(Debug, Clone)]
pub struct FinancialLogRepository {
    db: DatabaseConnection,
}

impl FinancialLogRepository {
    /// Creates a new financial log repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new financial log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or the insert fails.
    pub async fn create(
        &self,
        input: CreateFinancialLogInput,
    ) -> Result<FinancialLog, FinancialLogError> {
        validate_amount(input.amount)?;

        let model = financial_logs::ActiveModel {
            id: Set(FinancialLogId::new().into_inner()),
            entry_type: Set(input.entry_type),
            amount: Set(input.amount),
            description: Set(input.description),
            category: Set(input.category),
            reference: Set(input.reference),
            created_by: Set(input.created_by),
            created_at: Set(Utc::now().into()),
        };

        let inserted = model.insert(&self.db).await?;
        tracing::debug!(id = %inserted.id, "financial log created");

        Ok(to_domain(inserted))
    }

    /// Deletes a financial log entry. Hard remove, no audit trail.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no entry with the given id exists.
    pub async fn delete(&self, id: Uuid) -> Result<(), FinancialLogError> {
        let result = financial_logs::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(FinancialLogError::NotFound(id));
        }

        tracing::debug!(%id, "financial log deleted");
        Ok(())
    }

    /// Lists all financial log entries, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all(&self) -> Result<Vec<FinancialLog>, FinancialLogError> {
        let models = financial_logs::Entity::find()
            .order_by_desc(financial_logs::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    /// Sums the amounts of all entries of the given type.
    ///
    /// Returns 0 when no entries exist. Coalescing the empty aggregate to 0
    /// rather than NULL is a documented contract of this store.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn sum_by_type(&self, entry_type: EntryType) -> Result<Decimal, FinancialLogError> {
        let total: Option<Option<Decimal>> = financial_logs::Entity::find()
            .select_only()
            .column_as(financial_logs::Column::Amount.sum(), "total")
            .filter(financial_logs::Column::EntryType.eq(entry_type))
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}

/// Converts a database model into the domain representation.
pub(crate) fn to_domain(model: financial_logs::Model) -> FinancialLog {
    FinancialLog {
        id: FinancialLogId::from_uuid(model.id),
        entry_type: model.entry_type.into(),
        amount: model.amount,
        description: model.description,
        category: model.category,
        reference: model.reference.map(InvoiceId::from_uuid),
        created_by: UserId::from_uuid(model.created_by),
        created_at: model.created_at.into(),
    }
}
