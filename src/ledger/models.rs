//! Ledger data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::core_types::{AccountNo, TransactionId};

/// Account row
///
/// `name` and `created_at` never change after creation. `balance` is only
/// mutated through a unit of work holding the account's exclusive lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Account {
    #[schema(example = 1)]
    pub account_no: AccountNo,
    #[schema(example = "alice")]
    pub name: String,
    #[schema(value_type = String, example = "100.00")]
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Immutable record of one committed transfer
///
/// Money leaves `credit_account` and arrives at `debit_account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transaction {
    #[schema(value_type = String, example = "7f1c2a0e-7a2b-4c1e-9a43-2d1b7f9e0c11")]
    pub transaction_id: TransactionId,
    #[schema(value_type = String, example = "30.00")]
    pub amount: Decimal,
    pub credit_account: AccountNo,
    pub debit_account: AccountNo,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build the record for a transfer of `amount` from `credit_account` to `debit_account`.
    pub fn new(
        transaction_id: TransactionId,
        credit_account: AccountNo,
        debit_account: AccountNo,
        amount: Decimal,
    ) -> Self {
        Self {
            transaction_id,
            amount,
            credit_account,
            debit_account,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_account_serializes_balance_as_string() {
        let account = Account {
            account_no: 7,
            name: "alice".to_string(),
            balance: Decimal::new(10050, 2),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["account_no"], 7);
        assert_eq!(json["balance"], "100.50");
    }
}
