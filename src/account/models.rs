//! Read models returned by the account service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::core_types::AccountNo;
use crate::ledger::{Account, Transaction};

/// Account listing entry (number and name only)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AccountSummary {
    #[schema(example = 1)]
    pub account_no: AccountNo,
    #[schema(example = "alice")]
    pub name: String,
}

impl From<Account> for AccountSummary {
    fn from(a: Account) -> Self {
        Self {
            account_no: a.account_no,
            name: a.name,
        }
    }
}

/// Transaction listing entry
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TransactionSummary {
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, example = "30.00")]
    pub amount: Decimal,
}

impl From<Transaction> for TransactionSummary {
    fn from(t: Transaction) -> Self {
        Self {
            created_at: t.created_at,
            amount: t.amount,
        }
    }
}
