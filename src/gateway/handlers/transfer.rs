//! Transfer handler

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{ApiResult, TransferApiRequest, TransferApiResponse, ok};
use super::helpers::json_body;

/// Move funds between two accounts
///
/// POST /api/v1/transfer
///
/// Debits `creditAccountNo`, credits `debitAccountNo` and records one
/// transaction, all or nothing.
#[utoipa::path(
    post,
    path = "/api/v1/transfer",
    request_body = TransferApiRequest,
    responses(
        (status = 200, description = "Transfer committed", body = TransferApiResponse),
        (status = 400, description = "Invalid amount or account numbers"),
        (status = 404, description = "Account not found"),
        (status = 422, description = "Insufficient funds"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransferApiRequest>, JsonRejection>,
) -> ApiResult<TransferApiResponse> {
    let req = json_body(payload)?;
    let transaction_id = state
        .coordinator
        .transfer(
            req.credit_account_no,
            req.debit_account_no,
            req.amount.inner(),
        )
        .await?;
    ok(TransferApiResponse { transaction_id })
}
