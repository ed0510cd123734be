//! `SeaORM` entity definitions.

pub mod financial_logs;
pub mod invoices;
pub mod orders;
pub mod sea_orm_active_enums;
