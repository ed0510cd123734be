//! Financial log domain logic.
//!
//! This module implements the ledger side of the accounting core:
//! - Log entries (income and expense events)
//! - Input validation for amounts and entry types
//! - Error types for ledger operations
//!
//! Entries are immutable once recorded: the domain exposes creation and
//! deletion only, never mutation.

pub mod entry;
pub mod error;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{EntryType, FinancialLog};
pub use error::LedgerError;
pub use validation::{parse_amount, parse_entry_type, validate_amount};
