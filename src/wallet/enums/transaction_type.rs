use serde::{Deserialize, Serialize};

/// Direction of a transaction. Amounts are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}
