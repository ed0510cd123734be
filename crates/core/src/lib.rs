//! Core business logic for Quill.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `ledger` - Financial log entries (income/expense) and validation
//! - `invoice` - Invoice lifecycle state machine
//! - `summary` - Financial summary aggregation

pub mod invoice;
pub mod ledger;
pub mod summary;
