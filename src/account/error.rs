use thiserror::Error;

use super::validation::ValidationError;
use crate::core_types::{AccountNo, TransactionId};
use crate::ledger::StoreError;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Account not found: {0}")]
    NotFound(AccountNo),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    #[error("Storage failure: {0}")]
    StorageFailure(#[from] StoreError),
}

impl AccountError {
    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            AccountError::Invalid(_) => 400,
            AccountError::NotFound(_) | AccountError::TransactionNotFound(_) => 404,
            AccountError::StorageFailure(_) => 500,
        }
    }
}
