//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError` / `ApiResult`: handler error path rendered into the same envelope
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::AccountError;
use crate::transfer::{ErrorKind, TransferError};

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Handler error path
// ============================================================================

/// Error returned by handlers; renders as `ApiResponse<()>` with an HTTP status
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 with the success envelope
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 with the success envelope
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.code, self.msg))).into_response()
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        let status =
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = match e.kind() {
            ErrorKind::InvalidInput => error_codes::INVALID_PARAMETER,
            ErrorKind::InsufficientFunds => error_codes::INSUFFICIENT_FUNDS,
            ErrorKind::AccountNotFound => error_codes::ACCOUNT_NOT_FOUND,
            ErrorKind::StorageFailure => error_codes::STORAGE_FAILURE,
        };
        // Storage details stay in the logs
        let msg = match e {
            TransferError::StorageFailure(_) => "Storage failure".to_string(),
            other => other.to_string(),
        };
        Self::new(status, code, msg)
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        let status =
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = match &e {
            AccountError::Invalid(_) => error_codes::INVALID_PARAMETER,
            AccountError::NotFound(_) => error_codes::ACCOUNT_NOT_FOUND,
            AccountError::TransactionNotFound(_) => error_codes::TRANSACTION_NOT_FOUND,
            AccountError::StorageFailure(_) => error_codes::STORAGE_FAILURE,
        };
        let msg = match e {
            AccountError::Invalid(v) => v.to_string(),
            AccountError::StorageFailure(inner) => {
                tracing::error!(error = %inner, "Account storage failure");
                "Storage failure".to_string()
            }
            other => other.to_string(),
        };
        Self::new(status, code, msg)
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_FUNDS: i32 = 1002;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4004;
    pub const TRANSACTION_NOT_FOUND: i32 = 4005;

    // Server errors (5xxx)
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
    pub const STORAGE_FAILURE: i32 = 5002;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_success_envelope_serialization() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json, serde_json::json!({"code": 0, "msg": "ok", "data": 42}));
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error(1001, "bad")).unwrap();
        assert_eq!(json, serde_json::json!({"code": 1001, "msg": "bad"}));
    }

    #[test]
    fn test_transfer_error_mapping() {
        let e = ApiError::from(TransferError::InsufficientFunds {
            account_no: 1,
            balance: Decimal::from(5),
            requested: Decimal::from(10),
        });
        assert_eq!(e.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(e.code, error_codes::INSUFFICIENT_FUNDS);

        let e = ApiError::from(TransferError::SameAccount);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, error_codes::INVALID_PARAMETER);

        let e = ApiError::from(TransferError::AccountNotFound(7));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.code, error_codes::ACCOUNT_NOT_FOUND);
    }

    #[test]
    fn test_storage_failure_hides_details() {
        let e = ApiError::from(TransferError::StorageFailure(
            "connection reset by peer".to_string(),
        ));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.code, error_codes::STORAGE_FAILURE);
        assert_eq!(e.msg, "Storage failure");
    }

    #[test]
    fn test_account_error_mapping() {
        let e = ApiError::from(AccountError::NotFound(3));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.code, error_codes::ACCOUNT_NOT_FOUND);

        let e = ApiError::from(AccountError::TransactionNotFound(uuid::Uuid::nil()));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.code, error_codes::TRANSACTION_NOT_FOUND);

        let e = ApiError::from(AccountError::Invalid(
            crate::account::ValidationError::NegativeBalance(Decimal::from(-1)),
        ));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, error_codes::INVALID_PARAMETER);
        assert_eq!(e.msg, "Opening balance cannot be negative: -1");

        let e = ApiError::from(AccountError::StorageFailure(
            crate::ledger::StoreError::LockTimeout,
        ));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.code, error_codes::STORAGE_FAILURE);
        assert_eq!(e.msg, "Storage failure");
    }
}
