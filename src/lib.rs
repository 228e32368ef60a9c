//! Mini Ledger - accounts and atomic fund transfers
//!
//! # Modules
//!
//! - [`core_types`] - Identifier aliases (AccountNo, TransactionId)
//! - [`ledger`] - Storage contract (`LedgerStore` / `UnitOfWork`) with PostgreSQL and in-memory backends
//! - [`transfer`] - Transfer coordinator: lock ordering, sufficiency check, atomic commit
//! - [`account`] - Account creation and read-only lookups
//! - [`gateway`] - HTTP API (axum) and OpenAPI docs
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] / [`logging`] - YAML configuration and tracing setup

// Core types - must be first!
pub mod core_types;

pub mod account;
pub mod config;
pub mod db;
pub mod gateway;
pub mod ledger;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{AccountError, AccountService};
pub use core_types::{AccountNo, TransactionId};
pub use ledger::{Account, LedgerStore, MemoryLedger, PgLedger, StoreError, Transaction, UnitOfWork};
pub use transfer::{ErrorKind, TransferCoordinator, TransferError, TransferRequest};
