//! Business rule validation for financial log input.

use rust_decimal::Decimal;

use super::entry::EntryType;
use super::error::LedgerError;

/// Validates that an amount is usable as a ledger value.
///
/// Zero is allowed; only negative amounts are rejected.
///
/// # Errors
///
/// Returns [`LedgerError::NegativeAmount`] if the amount is negative.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount);
    }
    Ok(amount)
}

/// Parses a textual amount into a validated decimal.
///
/// Callers that receive amounts as strings (form input, CSV) go through
/// here; typed callers use [`validate_amount`] directly.
///
/// # Errors
///
/// Returns an error if the input is not a decimal or is negative.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let amount: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| LedgerError::UnparsableAmount(raw.to_string()))?;
    validate_amount(amount)
}

/// Parses a textual entry type.
///
/// # Errors
///
/// Returns [`LedgerError::UnknownEntryType`] for anything other than
/// `Income` or `Expense` (case-insensitive).
pub fn parse_entry_type(raw: &str) -> Result<EntryType, LedgerError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "income" => Ok(EntryType::Income),
        "expense" => Ok(EntryType::Expense),
        _ => Err(LedgerError::UnknownEntryType(raw.to_string())),
    }
}
