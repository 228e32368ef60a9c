//! PostgreSQL ledger store
//!
//! Each unit of work is one database transaction. Exclusive locks are row
//! locks taken with `SELECT ... FOR UPDATE`; they are released by COMMIT or
//! ROLLBACK. A `sqlx::Transaction` dropped without commit rolls back, so
//! every exit path releases the connection and its locks.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres};
use tracing::debug;

use super::error::StoreError;
use super::models::{Account, Transaction};
use super::{LedgerStore, UnitOfWork};
use crate::core_types::{AccountNo, TransactionId};
use crate::db::Database;

/// Advisory lock key serialising account number assignment
const ACCOUNT_NO_LOCK_KEY: i64 = 0x4C45_4447_4552; // "LEDGER"

/// PostgreSQL-backed [`LedgerStore`]
pub struct PgLedger {
    pool: PgPool,
    lock_timeout: Option<Duration>,
}

impl PgLedger {
    /// Create a ledger over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            lock_timeout: None,
        }
    }

    /// Create a ledger sharing the pool of `db`
    pub fn from_database(db: &Database) -> Self {
        Self::new(db.pool().clone())
    }

    /// Abort lock waits longer than `timeout` with [`StoreError::LockTimeout`]
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl LedgerStore for PgLedger {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        let mut tx = self.pool.begin().await?;

        if let Some(timeout) = self.lock_timeout {
            // SET does not accept bind parameters; the value is a plain integer.
            let stmt = format!("SET LOCAL lock_timeout = '{}ms'", timeout.as_millis());
            sqlx::query(&stmt).execute(&mut *tx).await?;
        }

        Ok(Box::new(PgUnitOfWork {
            tx,
            locked: HashSet::new(),
        }))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        let rows: Vec<Account> = sqlx::query_as(
            r#"SELECT account_no, name, balance, created_at
               FROM account ORDER BY account_no"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_account(&self, account_no: AccountNo) -> Result<Option<Account>, StoreError> {
        let row: Option<Account> = sqlx::query_as(
            r#"SELECT account_no, name, balance, created_at
               FROM account WHERE account_no = $1"#,
        )
        .bind(account_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let rows: Vec<Transaction> = sqlx::query_as(
            r#"SELECT transaction_id, amount, credit_account, debit_account, created_at
               FROM transaction ORDER BY created_at, transaction_id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Option<Transaction>, StoreError> {
        let row: Option<Transaction> = sqlx::query_as(
            r#"SELECT transaction_id, amount, credit_account, debit_account, created_at
               FROM transaction WHERE transaction_id = $1"#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// One PostgreSQL transaction
struct PgUnitOfWork {
    tx: sqlx::Transaction<'static, Postgres>,
    /// Rows locked FOR UPDATE by this transaction
    locked: HashSet<AccountNo>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn get_for_update(
        &mut self,
        account_no: AccountNo,
    ) -> Result<Option<Account>, StoreError> {
        let row: Option<Account> = sqlx::query_as(
            r#"SELECT account_no, name, balance, created_at
               FROM account WHERE account_no = $1
               FOR UPDATE"#,
        )
        .bind(account_no)
        .fetch_optional(&mut *self.tx)
        .await?;

        if row.is_some() {
            self.locked.insert(account_no);
        }
        Ok(row)
    }

    async fn apply_delta(
        &mut self,
        account_no: AccountNo,
        delta: Decimal,
    ) -> Result<(), StoreError> {
        if !self.locked.contains(&account_no) {
            return Err(StoreError::NotLocked(account_no));
        }

        let result = sqlx::query("UPDATE account SET balance = balance + $1 WHERE account_no = $2")
            .bind(delta)
            .bind(account_no)
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RowMissing(account_no));
        }
        Ok(())
    }

    async fn insert_transaction(&mut self, transaction: &Transaction) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO transaction
                (transaction_id, amount, credit_account, debit_account, created_at)
            VALUES
                ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(transaction.transaction_id)
        .bind(transaction.amount)
        .bind(transaction.credit_account)
        .bind(transaction.debit_account)
        .bind(transaction.created_at)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn insert_account(
        &mut self,
        name: &str,
        balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Result<Account, StoreError> {
        // Held until COMMIT/ROLLBACK: concurrent creators queue here, so the
        // MAX() below always sees the previous creator's row.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(ACCOUNT_NO_LOCK_KEY)
            .execute(&mut *self.tx)
            .await?;

        let account: Account = sqlx::query_as(
            r#"
            INSERT INTO account (account_no, name, balance, created_at)
            SELECT COALESCE(MAX(account_no), 0) + 1, $1, $2, $3 FROM account
            RETURNING account_no, name, balance, created_at
            "#,
        )
        .bind(name)
        .bind(balance)
        .bind(created_at)
        .fetch_one(&mut *self.tx)
        .await?;

        debug!(account_no = account.account_no, "Account row inserted");
        Ok(account)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
