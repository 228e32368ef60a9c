//! Request / response bodies for ledger endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::money::StrictDecimal;
use crate::core_types::{AccountNo, TransactionId};

/// POST /api/v1/account
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = "alice")]
    pub name: String,
    /// Opening balance; JSON string or number
    #[schema(value_type = String, example = "100.00")]
    pub balance: StrictDecimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAccountResponse {
    #[schema(example = 1)]
    pub account_no: AccountNo,
}

/// POST /api/v1/transfer
///
/// `creditAccountNo` is the account funds leave; `debitAccountNo` receives them.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferApiRequest {
    #[schema(example = 1)]
    pub credit_account_no: i64,
    #[schema(example = 2)]
    pub debit_account_no: i64,
    #[schema(value_type = String, example = "30.00")]
    pub amount: StrictDecimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferApiResponse {
    #[schema(value_type = String, example = "6f1c2e3a-8a0e-4d5b-9a57-0f1b9c6c2d11")]
    pub transaction_id: TransactionId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_transfer_request_uses_camel_case() {
        let req: TransferApiRequest = serde_json::from_str(
            r#"{"creditAccountNo": 1, "debitAccountNo": 2, "amount": "30.00"}"#,
        )
        .unwrap();
        assert_eq!(req.credit_account_no, 1);
        assert_eq!(req.debit_account_no, 2);
        assert_eq!(req.amount.inner(), Decimal::new(3000, 2));
    }

    #[test]
    fn test_transfer_response_shape() {
        let id = uuid::Uuid::nil();
        let json = serde_json::to_value(TransferApiResponse { transaction_id: id }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"transactionId": "00000000-0000-0000-0000-000000000000"})
        );
    }
}
