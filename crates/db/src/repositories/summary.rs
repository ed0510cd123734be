//! Summary repository for the dashboard-facing financial summary.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use quill_core::summary::FinancialSummary;
use quill_shared::error::AppError;

use crate::entities::{
    invoices,
    sea_orm_active_enums::{EntryType, InvoiceStatus},
};
use crate::repositories::financial_log::{FinancialLogError, FinancialLogRepository};

/// Invoice statuses that count toward the pending amount.
pub(crate) const PENDING_STATUSES: [InvoiceStatus; 3] = [
    InvoiceStatus::Sent,
    InvoiceStatus::Overdue,
    InvoiceStatus::Draft,
];

/// Error types for summary operations.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<FinancialLogError> for SummaryError {
    fn from(err: FinancialLogError) -> Self {
        match err {
            FinancialLogError::Database(e) => Self::Database(e),
            // The log store's read path only fails on database errors.
            FinancialLogError::NotFound(_) | FinancialLogError::Validation(_) => {
                Self::Database(DbErr::Custom(err.to_string()))
            }
        }
    }
}

/// Summary repository combining ledger and invoice aggregations.
///
/// Performs no writes; the two underlying aggregations are independent and
/// each reads a consistent snapshot of its own store.
#[derive(Debug, Clone)]
pub struct SummaryRepository {
    db: DatabaseConnection,
    logs: FinancialLogRepository,
}

impl SummaryRepository {
    /// Creates a new summary repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let logs = FinancialLogRepository::new(db.clone());
        Self { db, logs }
    }

    /// Computes the financial summary.
    ///
    /// Each of the three sums reads 0 when its source is empty; the result
    /// never carries an absent field.
    ///
    /// # Errors
    ///
    /// Returns an error if any aggregation query fails.
    pub async fn financial_summary(&self) -> Result<FinancialSummary, SummaryError> {
        let total_income = self.logs.sum_by_type(EntryType::Income).await?;
        let total_expenses = self.logs.sum_by_type(EntryType::Expense).await?;
        let pending = self.pending_invoices_amount().await?;

        Ok(FinancialSummary::compute(
            total_income,
            total_expenses,
            pending,
        ))
    }

    /// Sums `total_amount` over invoices not yet paid, 0 when none.
    async fn pending_invoices_amount(&self) -> Result<Decimal, SummaryError> {
        let total: Option<Option<Decimal>> = invoices::Entity::find()
            .select_only()
            .column_as(invoices::Column::TotalAmount.sum(), "total")
            .filter(invoices::Column::Status.is_in(PENDING_STATUSES))
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}
