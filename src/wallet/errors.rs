use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

use super::{
    util::cents::{self, Cents},
    CURRENCY,
};

#[derive(Debug)]
pub enum WalletApiError {
    InsufficientBalance(Cents),
    TransactionNotFound,
    TransactionRejected,
}

impl WalletApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InsufficientBalance(balance) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!(
                    "Insufficient balance. Current balance: {} {}",
                    cents::format_cents(balance),
                    CURRENCY
                ),
            },
            Self::TransactionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transaction not found.".to_string(),
            },
            Self::TransactionRejected => ApiError {
                code: StatusCode::UNPROCESSABLE_ENTITY,
                message: "Transaction violates ledger constraints.".to_string(),
            },
        }
    }
}
