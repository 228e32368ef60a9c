//! Gateway types module
//!
//! ## Input Types
//! - [`StrictDecimal`]: Format-validated decimal for API input
//! - [`CreateAccountRequest`], [`TransferApiRequest`]: request bodies
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`]: error path rendered into the same wrapper
//!
//! ## Submodules
//! - [`money`]: StrictDecimal
//! - [`requests`]: Endpoint bodies
//! - [`response`]: Response types and error codes

pub mod money;
pub mod requests;
pub mod response;

// Re-export commonly used types at module root
pub use money::StrictDecimal;
pub use requests::{
    CreateAccountRequest, CreateAccountResponse, TransferApiRequest, TransferApiResponse,
};
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
