use std::sync::Arc;

use crate::account::AccountService;
use crate::ledger::LedgerStore;
use crate::transfer::TransferCoordinator;

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    /// Balance-mutating path
    pub coordinator: Arc<TransferCoordinator>,
    /// Account creation and lookups
    pub accounts: Arc<AccountService>,
    /// Backing store (health checks)
    pub store: Arc<dyn LedgerStore>,
}

impl AppState {
    /// Wire both services over one store
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            coordinator: Arc::new(TransferCoordinator::new(store.clone())),
            accounts: Arc::new(AccountService::new(store.clone())),
            store,
        }
    }
}
