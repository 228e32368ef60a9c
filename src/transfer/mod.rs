//! Transfer Coordinator
//!
//! Atomic movement of funds between two accounts of one ledger store.
//!
//! # Safety Invariants
//!
//! 1. **Canonical Lock Order**: rows are locked in ascending account number
//! 2. **Check Under Lock**: funds are checked only after both locks are held
//! 3. **All-or-Nothing**: balances and the transaction record commit together
//!    or not at all
//! 4. **No Hidden Retry**: storage failures are returned to the caller as-is

pub mod coordinator;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use coordinator::TransferCoordinator;
pub use error::{ErrorKind, TransferError};
pub use types::TransferRequest;
