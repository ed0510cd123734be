//! Ledger error types for validation failures.

use thiserror::Error;

/// Errors that can occur while validating financial log input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Entry amount cannot be negative.
    #[error("Entry amount cannot be negative")]
    NegativeAmount,

    /// Entry amount could not be parsed as a decimal.
    #[error("Entry amount is not a valid decimal: {0}")]
    UnparsableAmount(String),

    /// Entry type is not one of the supported kinds.
    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),
}
