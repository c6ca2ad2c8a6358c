use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    app::util::time,
    wallet::{
        dtos::create_transaction_dto::CreateTransactionDto,
        enums::transaction_type::TransactionType,
        util::cents::{self, Cents},
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    #[serde(with = "cents::as_decimal")]
    pub amount: Cents,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub created_at: i64,
}

impl Transaction {
    /// A record not yet written to the store; `id` is assigned on insert.
    pub fn new(dto: &CreateTransactionDto) -> Self {
        return Self {
            id: 0,
            amount: cents::from_decimal(dto.amount),
            transaction_type: dto.transaction_type,
            description: dto.description.to_owned(),
            created_at: dto.date.unwrap_or_else(time::current_time_in_secs),
        };
    }

    pub fn sortable_fields() -> [&'static str; 2] {
        return ["created_at", "amount"];
    }
}
