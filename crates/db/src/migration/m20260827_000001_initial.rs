//! Initial database migration.
//!
//! Creates the enums and tables for orders, invoices, and financial logs.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: TABLES
        // ============================================================
        db.execute_unprepared(ORDERS_SQL).await?;
        db.execute_unprepared(INVOICES_SQL).await?;
        db.execute_unprepared(FINANCIAL_LOGS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r"
            DROP TABLE IF EXISTS financial_logs;
            DROP TABLE IF EXISTS invoices;
            DROP TABLE IF EXISTS orders;
            DROP TYPE IF EXISTS entry_type;
            DROP TYPE IF EXISTS invoice_status;
            DROP TYPE IF EXISTS order_status;
            ",
        )
        .await?;

        Ok(())
    }
}

const ENUMS_SQL: &str = r"
-- Financial log entry types
CREATE TYPE entry_type AS ENUM ('income', 'expense');

-- Invoice lifecycle status
CREATE TYPE invoice_status AS ENUM ('draft', 'sent', 'paid', 'overdue');

-- Order status
CREATE TYPE order_status AS ENUM ('pending', 'completed', 'cancelled');
";

const ORDERS_SQL: &str = r"
CREATE TABLE orders (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL,
    status order_status NOT NULL DEFAULT 'pending',
    order_date TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_orders_user ON orders(user_id);
";

const INVOICES_SQL: &str = r"
CREATE TABLE invoices (
    id UUID PRIMARY KEY,
    order_id UUID NOT NULL REFERENCES orders(id),
    total_amount NUMERIC(19, 4) NOT NULL,
    status invoice_status NOT NULL DEFAULT 'draft',
    invoice_date TIMESTAMPTZ NOT NULL,
    due_date TIMESTAMPTZ,
    sent_at TIMESTAMPTZ,
    paid_at TIMESTAMPTZ,
    pdf_url TEXT NOT NULL
);

CREATE INDEX idx_invoices_order ON invoices(order_id);
CREATE INDEX idx_invoices_status ON invoices(status);
CREATE INDEX idx_invoices_invoice_date ON invoices(invoice_date DESC);
";

const FINANCIAL_LOGS_SQL: &str = r"
CREATE TABLE financial_logs (
    id UUID PRIMARY KEY,
    entry_type entry_type NOT NULL,
    -- Ledger values are non-negative by contract; enforced at the schema
    -- level so no code path can slip a negative entry in.
    amount NUMERIC(19, 4) NOT NULL CHECK (amount >= 0),
    description TEXT,
    category TEXT,
    reference UUID,
    created_by UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_financial_logs_type ON financial_logs(entry_type);
CREATE INDEX idx_financial_logs_created_at ON financial_logs(created_at DESC);
";
