use serde::{Deserialize, Serialize};

use crate::wallet::{
    util::cents::{self, Cents},
    CURRENCY,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(with = "cents::as_decimal")]
    pub balance: Cents,
    pub currency: String,
}

impl WalletBalance {
    pub fn new(balance: Cents) -> Self {
        Self {
            balance,
            currency: CURRENCY.to_string(),
        }
    }
}
