//! Account Ledger
//!
//! Owns account balance state. Every balance mutation happens inside a
//! [`UnitOfWork`] that holds exclusive row locks until it commits or rolls back.
//!
//! # Backends
//!
//! - [`PgLedger`]: PostgreSQL (`SELECT ... FOR UPDATE`, multi-statement transactions)
//! - [`MemoryLedger`]: in-process store with the same locking contract
//!
//! # Unit of Work Contract
//!
//! ```text
//! begin ──▶ get_for_update* ──▶ apply_delta* ──▶ insert_* ──▶ commit
//!                 │                                  │
//!                 └──────────── any error ───────────┴──▶ rollback / drop
//! ```
//!
//! Dropping a unit of work without calling `commit` discards all of its writes
//! and releases its locks.

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::core_types::{AccountNo, TransactionId};

pub use error::StoreError;
pub use memory::MemoryLedger;
pub use models::{Account, Transaction};
pub use postgres::PgLedger;

/// Transactional account store
///
/// Injected as `Arc<dyn LedgerStore>`; read methods only observe committed state
/// and never take exclusive locks.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Backend name for logging
    fn backend(&self) -> &'static str;

    /// Start a new unit of work
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError>;

    /// All accounts ordered by account number
    async fn list_accounts(&self) -> Result<Vec<Account>, StoreError>;

    /// Single account by number
    async fn get_account(&self, account_no: AccountNo) -> Result<Option<Account>, StoreError>;

    /// All transactions ordered by creation time
    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Single transaction by id
    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Option<Transaction>, StoreError>;

    /// Check the store is reachable
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// A set of storage operations that commit or roll back together
#[async_trait]
pub trait UnitOfWork: Send {
    /// Read an account and take its exclusive lock until this unit ends.
    ///
    /// Returns `None` if the account does not exist. Calling this again for an
    /// account already locked by this unit returns the unit's current view.
    async fn get_for_update(&mut self, account_no: AccountNo)
    -> Result<Option<Account>, StoreError>;

    /// Add `delta` to the balance of an account locked by this unit.
    ///
    /// No sufficiency check is made here.
    async fn apply_delta(&mut self, account_no: AccountNo, delta: Decimal)
    -> Result<(), StoreError>;

    /// Append an immutable transaction record
    async fn insert_transaction(&mut self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Create an account numbered `max(account_no) + 1`.
    ///
    /// The number is computed inside this unit, serialised against other
    /// creators until the unit ends.
    async fn insert_account(
        &mut self,
        name: &str,
        balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Result<Account, StoreError>;

    /// Publish every write and release all locks
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    /// Discard every write and release all locks
    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}
