//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::{AccountSummary, TransactionSummary};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    CreateAccountRequest, CreateAccountResponse, TransferApiRequest, TransferApiResponse,
};
use crate::ledger::{Account, Transaction};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mini Ledger API",
        version = "1.0.0",
        description = "Accounts and atomic fund transfers with an immutable transaction record."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::list_accounts,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::account::list_account_numbers,
        crate::gateway::handlers::transaction::list_transactions,
        crate::gateway::handlers::transaction::get_transaction,
        crate::gateway::handlers::transfer::create_transfer,
    ),
    components(
        schemas(
            HealthResponse,
            Account,
            AccountSummary,
            Transaction,
            TransactionSummary,
            CreateAccountRequest,
            CreateAccountResponse,
            TransferApiRequest,
            TransferApiResponse,
        )
    ),
    tags(
        (name = "Account", description = "Account creation and lookups"),
        (name = "Transaction", description = "Transaction records (read-only)"),
        (name = "Transfer", description = "Atomic fund transfers"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
