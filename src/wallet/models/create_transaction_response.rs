use serde::{Deserialize, Serialize};

use crate::wallet::{
    util::cents::{self, Cents},
    CURRENCY,
};

use super::transaction::Transaction;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub transaction: Transaction,
    #[serde(with = "cents::as_decimal")]
    pub balance: Cents,
    pub currency: String,
}

impl CreateTransactionResponse {
    pub fn new(transaction: Transaction, balance: Cents) -> Self {
        Self {
            transaction,
            balance,
            currency: CURRENCY.to_string(),
        }
    }
}
