//! Account handlers (creation, listings, details)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{
    ApiResult, CreateAccountRequest, CreateAccountResponse, created, ok,
};
use super::helpers::{json_body, parse_account_no};
use crate::account::AccountSummary;
use crate::core_types::AccountNo;
use crate::ledger::Account;

/// Create account
///
/// POST /api/v1/account
#[utoipa::path(
    post,
    path = "/api/v1/account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = CreateAccountResponse),
        (status = 400, description = "Invalid name or balance"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> ApiResult<CreateAccountResponse> {
    let req = json_body(payload)?;
    let account = state
        .accounts
        .create_account(&req.name, req.balance.inner())
        .await?;
    created(CreateAccountResponse {
        account_no: account.account_no,
    })
}

/// List accounts (number and name)
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    responses(
        (status = 200, description = "Accounts ordered by number", body = [AccountSummary]),
        (status = 500, description = "Storage failure")
    ),
    tag = "Account"
)]
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Vec<AccountSummary>> {
    ok(state.accounts.list_accounts().await?)
}

/// Get account details
#[utoipa::path(
    get,
    path = "/api/v1/account/{account_no}",
    params(
        ("account_no" = i64, Path, description = "Account number")
    ),
    responses(
        (status = 200, description = "Account details", body = Account),
        (status = 400, description = "Malformed account number"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_no): Path<String>,
) -> ApiResult<Account> {
    let account_no = parse_account_no(&account_no)?;
    ok(state.accounts.get_account(account_no).await?)
}

/// List account numbers
#[utoipa::path(
    get,
    path = "/api/v1/account-numbers",
    responses(
        (status = 200, description = "Account numbers in ascending order", body = [i64]),
        (status = 500, description = "Storage failure")
    ),
    tag = "Account"
)]
pub async fn list_account_numbers(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<AccountNo>> {
    ok(state.accounts.list_account_numbers().await?)
}
