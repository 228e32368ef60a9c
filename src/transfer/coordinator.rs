//! Transfer Coordinator
//!
//! Moves funds between two accounts as one unit of work:
//!
//! ```text
//! validate ─▶ begin ─▶ lock (ascending account_no) ─▶ check funds
//!                 ─▶ apply deltas ─▶ append record ─▶ commit
//!                          │ any error
//!                          ▼
//!                       rollback
//! ```
//!
//! Both rows are always locked in ascending account number order, so two
//! transfers crossing the same pair in opposite directions queue on the same
//! first lock instead of deadlocking.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::error::{ErrorKind, TransferError};
use super::types::TransferRequest;
use crate::core_types::{AccountNo, TransactionId};
use crate::ledger::{Account, LedgerStore, Transaction, UnitOfWork};

/// Transfer Coordinator - orchestrates one atomic transfer per call
pub struct TransferCoordinator {
    store: Arc<dyn LedgerStore>,
}

impl TransferCoordinator {
    /// Create a new TransferCoordinator over an injected store
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Move `amount` from `credit_account_no` to `debit_account_no`
    pub async fn transfer(
        &self,
        credit_account_no: AccountNo,
        debit_account_no: AccountNo,
        amount: Decimal,
    ) -> Result<TransactionId, TransferError> {
        self.execute(TransferRequest::new(
            credit_account_no,
            debit_account_no,
            amount,
        ))
        .await
    }

    /// Execute a transfer request
    ///
    /// All-or-nothing: on any error both balances and the transaction log are
    /// left exactly as they were. No retry is attempted.
    pub async fn execute(&self, req: TransferRequest) -> Result<TransactionId, TransferError> {
        req.validate()?;

        let transaction_id = Uuid::new_v4();
        let mut uow = self.store.begin().await?;

        match apply_transfer(uow.as_mut(), transaction_id, &req).await {
            Ok(record) => {
                if let Err(e) = uow.commit().await {
                    error!(transaction_id = %transaction_id, error = %e, "Transfer commit failed");
                    return Err(e.into());
                }
                info!(
                    transaction_id = %record.transaction_id,
                    credit_account = record.credit_account,
                    debit_account = record.debit_account,
                    amount = %record.amount,
                    "Transfer committed"
                );
                Ok(transaction_id)
            }
            Err(e) => {
                if let Err(rb) = uow.rollback().await {
                    warn!(transaction_id = %transaction_id, error = %rb, "Rollback failed");
                }
                if e.kind() == ErrorKind::StorageFailure {
                    error!(transaction_id = %transaction_id, error = %e, "Transfer aborted");
                } else {
                    debug!(transaction_id = %transaction_id, code = e.code(), "Transfer rejected");
                }
                Err(e)
            }
        }
    }
}

/// Steps 2-6 of a transfer, inside an open unit of work
async fn apply_transfer(
    uow: &mut dyn UnitOfWork,
    transaction_id: TransactionId,
    req: &TransferRequest,
) -> Result<Transaction, TransferError> {
    let mut credit: Option<Account> = None;

    for account_no in req.lock_order() {
        let account = uow
            .get_for_update(account_no)
            .await?
            .ok_or(TransferError::AccountNotFound(account_no))?;
        if account_no == req.credit_account_no {
            credit = Some(account);
        }
    }

    let credit = credit.ok_or(TransferError::AccountNotFound(req.credit_account_no))?;
    if credit.balance < req.amount {
        return Err(TransferError::InsufficientFunds {
            account_no: credit.account_no,
            balance: credit.balance,
            requested: req.amount,
        });
    }

    uow.apply_delta(req.credit_account_no, -req.amount).await?;
    uow.apply_delta(req.debit_account_no, req.amount).await?;

    let record = Transaction::new(
        transaction_id,
        req.credit_account_no,
        req.debit_account_no,
        req.amount,
    );
    uow.insert_transaction(&record).await?;

    Ok(record)
}
