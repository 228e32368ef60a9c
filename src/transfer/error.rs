//! Transfer Error Types
//!
//! Every failure of a transfer maps onto one [`ErrorKind`]. The error itself
//! keeps the diagnostic detail for logs and API messages.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::core_types::AccountNo;
use crate::ledger::StoreError;

/// Closed set of transfer failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    AccountNotFound,
    InsufficientFunds,
    StorageFailure,
}

/// Transfer error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    // === Validation Errors ===
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Source and destination account cannot be the same")]
    SameAccount,

    #[error("Invalid account number: {0}")]
    InvalidAccountNo(i64),

    // === Account Errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNo),

    #[error("Insufficient funds in account {account_no}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account_no: AccountNo,
        balance: Decimal,
        requested: Decimal,
    },

    // === System Errors ===
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl TransferError {
    /// Failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransferError::InvalidAmount
            | TransferError::SameAccount
            | TransferError::InvalidAccountNo(_) => ErrorKind::InvalidInput,
            TransferError::AccountNotFound(_) => ErrorKind::AccountNotFound,
            TransferError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            TransferError::StorageFailure(_) => ErrorKind::StorageFailure,
        }
    }

    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::InvalidAccountNo(_) => "INVALID_ACCOUNT_NO",
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            TransferError::StorageFailure(_) => "STORAGE_FAILURE",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidInput => 400,
            ErrorKind::AccountNotFound => 404,
            ErrorKind::InsufficientFunds => 422,
            ErrorKind::StorageFailure => 500,
        }
    }
}

impl From<StoreError> for TransferError {
    fn from(e: StoreError) -> Self {
        TransferError::StorageFailure(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(TransferError::InvalidAmount.kind(), ErrorKind::InvalidInput);
        assert_eq!(TransferError::SameAccount.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            TransferError::InvalidAccountNo(0).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            TransferError::AccountNotFound(9).kind(),
            ErrorKind::AccountNotFound
        );
        assert_eq!(
            TransferError::StorageFailure("x".into()).kind(),
            ErrorKind::StorageFailure
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::SameAccount.code(), "SAME_ACCOUNT");
        assert_eq!(
            TransferError::AccountNotFound(3).code(),
            "ACCOUNT_NOT_FOUND"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
        assert_eq!(TransferError::AccountNotFound(1).http_status(), 404);
        assert_eq!(
            TransferError::InsufficientFunds {
                account_no: 1,
                balance: Decimal::from(10),
                requested: Decimal::from(50),
            }
            .http_status(),
            422
        );
        assert_eq!(
            TransferError::StorageFailure("down".into()).http_status(),
            500
        );
    }

    #[test]
    fn test_store_error_becomes_storage_failure() {
        let err = TransferError::from(StoreError::LockTimeout);
        assert_eq!(err.kind(), ErrorKind::StorageFailure);
        assert_eq!(
            err.to_string(),
            "Storage failure: Timed out waiting for a row lock"
        );
    }

    #[test]
    fn test_display() {
        let err = TransferError::InsufficientFunds {
            account_no: 1,
            balance: Decimal::from(10),
            requested: Decimal::from(50),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds in account 1: balance 10, requested 50"
        );
    }
}
