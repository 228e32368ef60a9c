//! Account management module
//!
//! Account creation and read-only lookups over the ledger store.
//! Balance mutation is not exposed here; it belongs to the transfer coordinator.

pub mod error;
pub mod models;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::AccountError;
pub use models::{AccountSummary, TransactionSummary};
pub use service::AccountService;
pub use validation::{AccountName, ValidationError};
