//! Transfer request types

use rust_decimal::Decimal;

use super::error::TransferError;
use crate::core_types::{AccountNo, is_valid_account_no};

/// A request to move `amount` from `credit_account_no` to `debit_account_no`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    /// Source account (balance decreases)
    pub credit_account_no: AccountNo,
    /// Destination account (balance increases)
    pub debit_account_no: AccountNo,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(credit_account_no: AccountNo, debit_account_no: AccountNo, amount: Decimal) -> Self {
        Self {
            credit_account_no,
            debit_account_no,
            amount,
        }
    }

    /// Check the request without touching storage
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }
        for account_no in [self.credit_account_no, self.debit_account_no] {
            if !is_valid_account_no(account_no) {
                return Err(TransferError::InvalidAccountNo(account_no));
            }
        }
        if self.credit_account_no == self.debit_account_no {
            return Err(TransferError::SameAccount);
        }
        Ok(())
    }

    /// Both accounts in canonical lock order (ascending account number)
    pub fn lock_order(&self) -> [AccountNo; 2] {
        if self.credit_account_no < self.debit_account_no {
            [self.credit_account_no, self.debit_account_no]
        } else {
            [self.debit_account_no, self.credit_account_no]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_amount() {
        assert!(TransferRequest::new(1, 2, Decimal::new(1, 2)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_and_negative_amount() {
        assert_eq!(
            TransferRequest::new(1, 2, Decimal::ZERO).validate(),
            Err(TransferError::InvalidAmount)
        );
        assert_eq!(
            TransferRequest::new(1, 2, Decimal::from(-5)).validate(),
            Err(TransferError::InvalidAmount)
        );
    }

    #[test]
    fn test_validate_rejects_same_account() {
        assert_eq!(
            TransferRequest::new(3, 3, Decimal::ONE).validate(),
            Err(TransferError::SameAccount)
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_account_no() {
        assert_eq!(
            TransferRequest::new(0, 2, Decimal::ONE).validate(),
            Err(TransferError::InvalidAccountNo(0))
        );
        assert_eq!(
            TransferRequest::new(1, -4, Decimal::ONE).validate(),
            Err(TransferError::InvalidAccountNo(-4))
        );
    }

    #[test]
    fn test_lock_order_is_direction_independent() {
        let ab = TransferRequest::new(5, 9, Decimal::ONE);
        let ba = TransferRequest::new(9, 5, Decimal::ONE);
        assert_eq!(ab.lock_order(), [5, 9]);
        assert_eq!(ba.lock_order(), [5, 9]);
    }
}
