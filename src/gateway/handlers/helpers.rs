//! Handler helper functions
//!
//! Extraction failures are turned into `ApiError` so every response,
//! including malformed input, uses the common envelope.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use super::super::types::ApiError;
use crate::core_types::{AccountNo, TransactionId, is_valid_account_no};

/// Unwrap a JSON body or report why it was rejected
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// Parse a path segment as a positive account number
pub fn parse_account_no(raw: &str) -> Result<AccountNo, ApiError> {
    raw.parse::<AccountNo>()
        .ok()
        .filter(|n| is_valid_account_no(*n))
        .ok_or_else(|| ApiError::bad_request(format!("Invalid account number: {}", raw)))
}

/// Parse a path segment as a transaction UUID
pub fn parse_transaction_id(raw: &str) -> Result<TransactionId, ApiError> {
    raw.parse::<TransactionId>()
        .map_err(|_| ApiError::bad_request(format!("Invalid transaction id: {}", raw)))
}
