//! Transaction record lookups (read-only)

use std::sync::Arc;

use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{ApiResult, ok};
use super::helpers::parse_transaction_id;
use crate::account::TransactionSummary;
use crate::ledger::Transaction;

/// List transactions
#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    responses(
        (status = 200, description = "Transactions ordered by creation time", body = [TransactionSummary]),
        (status = 500, description = "Storage failure")
    ),
    tag = "Transaction"
)]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<TransactionSummary>> {
    ok(state.accounts.list_transactions().await?)
}

/// Get transaction details
#[utoipa::path(
    get,
    path = "/api/v1/transaction/{transaction_id}",
    params(
        ("transaction_id" = String, Path, description = "Transaction UUID")
    ),
    responses(
        (status = 200, description = "Transaction record", body = Transaction),
        (status = 400, description = "Malformed transaction id"),
        (status = 404, description = "Transaction not found")
    ),
    tag = "Transaction"
)]
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<String>,
) -> ApiResult<Transaction> {
    let transaction_id = parse_transaction_id(&transaction_id)?;
    ok(state.accounts.get_transaction(transaction_id).await?)
}
