//! HTTP handlers, one file per resource

pub mod account;
pub mod health;
pub mod helpers;
pub mod transaction;
pub mod transfer;

pub use account::{create_account, get_account, list_account_numbers, list_accounts};
pub use health::{HealthResponse, health_check};
pub use transaction::{get_transaction, list_transactions};
pub use transfer::create_transfer;
