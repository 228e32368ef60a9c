//! Account creation and read-only lookups

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::error::AccountError;
use super::models::{AccountSummary, TransactionSummary};
use super::validation::{AccountName, validate_opening_balance};
use crate::core_types::{AccountNo, TransactionId};
use crate::ledger::{Account, LedgerStore, Transaction};

pub struct AccountService {
    store: Arc<dyn LedgerStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Create an account with an opening balance.
    ///
    /// The account number is assigned inside the same unit of work as the
    /// insert, so concurrent creators never receive the same number.
    pub async fn create_account(
        &self,
        name: &str,
        opening_balance: Decimal,
    ) -> Result<Account, AccountError> {
        let name = AccountName::new(name)?;
        let balance = validate_opening_balance(opening_balance)?;

        let mut uow = self.store.begin().await?;
        let account = match uow.insert_account(name.as_str(), balance, Utc::now()).await {
            Ok(account) => account,
            Err(e) => {
                if let Err(rb) = uow.rollback().await {
                    warn!(error = %rb, "Rollback failed");
                }
                return Err(e.into());
            }
        };
        uow.commit().await?;

        info!(account_no = account.account_no, name = %account.name, "Account created");
        Ok(account)
    }

    pub async fn list_accounts(&self) -> Result<Vec<AccountSummary>, AccountError> {
        let accounts = self.store.list_accounts().await?;
        Ok(accounts.into_iter().map(AccountSummary::from).collect())
    }

    pub async fn list_account_numbers(&self) -> Result<Vec<AccountNo>, AccountError> {
        let accounts = self.store.list_accounts().await?;
        Ok(accounts.into_iter().map(|a| a.account_no).collect())
    }

    pub async fn get_account(&self, account_no: AccountNo) -> Result<Account, AccountError> {
        self.store
            .get_account(account_no)
            .await?
            .ok_or(AccountError::NotFound(account_no))
    }

    pub async fn list_transactions(&self) -> Result<Vec<TransactionSummary>, AccountError> {
        let rows = self.store.list_transactions().await?;
        Ok(rows.into_iter().map(TransactionSummary::from).collect())
    }

    pub async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, AccountError> {
        self.store
            .get_transaction(transaction_id)
            .await?
            .ok_or(AccountError::TransactionNotFound(transaction_id))
    }
}
