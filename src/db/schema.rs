//! Ledger schema bootstrap

use sqlx::PgPool;

/// Account and transaction tables (idempotent DDL)
pub const LEDGER_SCHEMA: &str = include_str!("../../migrations/0001_ledger.sql");

/// Create the ledger tables if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(LEDGER_SCHEMA).execute(pool).await?;
    tracing::info!("Ledger schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_both_relations() {
        assert!(LEDGER_SCHEMA.contains("CREATE TABLE IF NOT EXISTS account"));
        assert!(LEDGER_SCHEMA.contains("CREATE TABLE IF NOT EXISTS transaction"));
        assert!(LEDGER_SCHEMA.contains("REFERENCES account (account_no)"));
        assert!(LEDGER_SCHEMA.contains("CHECK (amount > 0)"));
    }
}
