//! In-memory ledger store
//!
//! Keeps the same locking contract as the PostgreSQL store without an
//! external database:
//!
//! - one async mutex per account row is the exclusive lock; a unit of work
//!   keeps the owned guard until it commits, rolls back or is dropped
//! - writes are staged inside the unit and published at commit under a single
//!   write lock over the committed state, so readers see all or nothing
//! - account number assignment is serialised by a table-level creation lock
//!   held for the rest of the creating unit

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::debug;

use super::error::StoreError;
use super::models::{Account, Transaction};
use super::{LedgerStore, UnitOfWork};
use crate::core_types::{AccountNo, TransactionId};

/// Committed, externally visible rows
#[derive(Default)]
struct CommittedState {
    accounts: BTreeMap<AccountNo, Account>,
    transactions: Vec<Transaction>,
    /// transaction_id -> index into `transactions`
    by_id: HashMap<TransactionId, usize>,
}

struct Inner {
    /// Exclusive row locks, one per committed account
    row_locks: DashMap<AccountNo, Arc<Mutex<()>>>,
    state: RwLock<CommittedState>,
    /// Table-level lock for account number assignment
    creation_lock: Arc<Mutex<()>>,
}

/// In-process [`LedgerStore`]
#[derive(Clone)]
pub struct MemoryLedger {
    inner: Arc<Inner>,
    lock_timeout: Option<Duration>,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                row_locks: DashMap::new(),
                state: RwLock::new(CommittedState::default()),
                creation_lock: Arc::new(Mutex::new(())),
            }),
            lock_timeout: None,
        }
    }

    /// Abort lock waits longer than `timeout` with [`StoreError::LockTimeout`]
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = Some(timeout);
        self
    }
}

/// Wait for `lock`, bounded by `timeout` when one is configured
async fn acquire(
    lock: Arc<Mutex<()>>,
    timeout: Option<Duration>,
) -> Result<OwnedMutexGuard<()>, StoreError> {
    match timeout {
        Some(t) => tokio::time::timeout(t, lock.lock_owned())
            .await
            .map_err(|_| StoreError::LockTimeout),
        None => Ok(lock.lock_owned().await),
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        Ok(Box::new(MemoryUnitOfWork {
            inner: Arc::clone(&self.inner),
            lock_timeout: self.lock_timeout,
            row_guards: HashMap::new(),
            staged: HashMap::new(),
            new_accounts: Vec::new(),
            new_transactions: Vec::new(),
            creation_guard: None,
        }))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        let state = self.inner.state.read().await;
        Ok(state.accounts.values().cloned().collect())
    }

    async fn get_account(&self, account_no: AccountNo) -> Result<Option<Account>, StoreError> {
        let state = self.inner.state.read().await;
        Ok(state.accounts.get(&account_no).cloned())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let state = self.inner.state.read().await;
        let mut rows = state.transactions.clone();
        rows.sort_by_key(|t| t.created_at);
        Ok(rows)
    }

    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Option<Transaction>, StoreError> {
        let state = self.inner.state.read().await;
        Ok(state
            .by_id
            .get(&transaction_id)
            .and_then(|&idx| state.transactions.get(idx))
            .cloned())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

struct MemoryUnitOfWork {
    inner: Arc<Inner>,
    lock_timeout: Option<Duration>,
    /// Row locks held by this unit
    row_guards: HashMap<AccountNo, OwnedMutexGuard<()>>,
    /// This unit's view of every row it locked or created
    staged: HashMap<AccountNo, Account>,
    new_accounts: Vec<AccountNo>,
    new_transactions: Vec<Transaction>,
    creation_guard: Option<OwnedMutexGuard<()>>,
}

impl MemoryUnitOfWork {
    /// True if the account exists either committed or created by this unit
    async fn account_visible(&self, account_no: AccountNo) -> bool {
        if self.staged.contains_key(&account_no) {
            return true;
        }
        self.inner
            .state
            .read()
            .await
            .accounts
            .contains_key(&account_no)
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn get_for_update(
        &mut self,
        account_no: AccountNo,
    ) -> Result<Option<Account>, StoreError> {
        if let Some(row) = self.staged.get(&account_no) {
            return Ok(Some(row.clone()));
        }

        // Clone the lock out so no map shard is held across the wait.
        let lock = match self.inner.row_locks.get(&account_no) {
            Some(entry) => Arc::clone(entry.value()),
            None => return Ok(None),
        };

        let guard = acquire(lock, self.lock_timeout).await?;

        // Stable while the guard is held: only the holder can publish this row.
        let row = self.inner.state.read().await.accounts.get(&account_no).cloned();
        let Some(row) = row else {
            return Ok(None);
        };

        self.row_guards.insert(account_no, guard);
        self.staged.insert(account_no, row.clone());
        Ok(Some(row))
    }

    async fn apply_delta(
        &mut self,
        account_no: AccountNo,
        delta: Decimal,
    ) -> Result<(), StoreError> {
        let row = self
            .staged
            .get_mut(&account_no)
            .ok_or(StoreError::NotLocked(account_no))?;
        row.balance = row
            .balance
            .checked_add(delta)
            .ok_or(StoreError::Overflow(account_no))?;
        Ok(())
    }

    async fn insert_transaction(&mut self, transaction: &Transaction) -> Result<(), StoreError> {
        for account_no in [transaction.credit_account, transaction.debit_account] {
            if !self.account_visible(account_no).await {
                return Err(StoreError::RowMissing(account_no));
            }
        }

        let duplicate = self
            .new_transactions
            .iter()
            .any(|t| t.transaction_id == transaction.transaction_id)
            || self
                .inner
                .state
                .read()
                .await
                .by_id
                .contains_key(&transaction.transaction_id);
        if duplicate {
            return Err(StoreError::Conflict(format!(
                "duplicate transaction_id {}",
                transaction.transaction_id
            )));
        }

        self.new_transactions.push(transaction.clone());
        Ok(())
    }

    async fn insert_account(
        &mut self,
        name: &str,
        balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Result<Account, StoreError> {
        if self.creation_guard.is_none() {
            let guard = acquire(Arc::clone(&self.inner.creation_lock), self.lock_timeout).await?;
            self.creation_guard = Some(guard);
        }

        let committed_max = self
            .inner
            .state
            .read()
            .await
            .accounts
            .keys()
            .next_back()
            .copied()
            .unwrap_or(0);
        let staged_max = self.new_accounts.iter().copied().max().unwrap_or(0);
        let account_no = committed_max.max(staged_max) + 1;

        let account = Account {
            account_no,
            name: name.to_string(),
            balance,
            created_at,
        };
        self.new_accounts.push(account_no);
        self.staged.insert(account_no, account.clone());

        debug!(account_no, "Account row staged");
        Ok(account)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let MemoryUnitOfWork {
            inner,
            row_guards,
            staged,
            new_accounts,
            new_transactions,
            creation_guard,
            ..
        } = *self;

        {
            let mut state = inner.state.write().await;
            for account_no in &new_accounts {
                inner
                    .row_locks
                    .insert(*account_no, Arc::new(Mutex::new(())));
            }
            for (account_no, row) in staged {
                state.accounts.insert(account_no, row);
            }
            for transaction in new_transactions {
                let idx = state.transactions.len();
                state.by_id.insert(transaction.transaction_id, idx);
                state.transactions.push(transaction);
            }
        }

        // Locks are released only after the writes are visible.
        drop(row_guards);
        drop(creation_guard);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        // Staged writes and guards are dropped with the unit.
        Ok(())
    }
}
