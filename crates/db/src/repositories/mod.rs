//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. They return `quill-core` domain types, never raw models.

pub mod financial_log;
pub mod invoice;
pub mod summary;

#[cfg(test)]
mod financial_log_tests;

pub use financial_log::{CreateFinancialLogInput, FinancialLogError, FinancialLogRepository};
pub use invoice::{CreateInvoiceInput, InvoiceError, InvoiceRepository};
pub use summary::{SummaryError, SummaryRepository};
