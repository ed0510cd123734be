//! Financial summary aggregation.
//!
//! The summary is a pure read combining two independent aggregations: the
//! income/expense sums from the financial log and the pending total from
//! open invoices. Absent sums are 0, never null; that coalescing is a
//! documented contract of this subsystem, not an accident of the query
//! layer.

pub mod types;

#[cfg(test)]
mod summary_props;

pub use types::{sum_by_type, FinancialSummary};
