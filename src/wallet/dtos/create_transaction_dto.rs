use serde::Deserialize;
use validator::Validate;

use crate::wallet::enums::transaction_type::TransactionType;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionDto {
    #[validate(range(
        min = 0.01,
        max = 1000000000.0,
        message = "amount must be between 0.01 and 1000000000."
    ))]
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[validate(length(max = 255, message = "description must be at most 255 characters."))]
    pub description: Option<String>,
    #[validate(range(min = 0, message = "date must be a unix timestamp in seconds."))]
    pub date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(amount: f64, description: Option<String>) -> CreateTransactionDto {
        CreateTransactionDto {
            amount,
            transaction_type: TransactionType::Income,
            description,
            date: None,
        }
    }

    #[test]
    fn accepts_positive_amounts() {
        assert!(dto(0.01, None).validate().is_ok());
        assert!(dto(100.0, Some("salary".to_string())).validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(dto(0.0, None).validate().is_err());
        assert!(dto(-5.0, None).validate().is_err());
        assert!(dto(0.001, None).validate().is_err());
    }

    #[test]
    fn caps_single_amounts() {
        assert!(dto(1_000_000_000.0, None).validate().is_ok());
        assert!(dto(1_000_000_000.01, None).validate().is_err());
    }

    #[test]
    fn limits_description_length() {
        assert!(dto(1.0, Some("a".repeat(255))).validate().is_ok());
        assert!(dto(1.0, Some("a".repeat(256))).validate().is_err());
    }

    #[test]
    fn deserializes_type_as_closed_enum() {
        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{"amount": 30, "type": "expense"}"#).unwrap();
        assert_eq!(dto.transaction_type, TransactionType::Expense);
        assert!(dto.description.is_none());
        assert!(dto.date.is_none());

        let invalid = serde_json::from_str::<CreateTransactionDto>(r#"{"amount": 30, "type": "refund"}"#);
        assert!(invalid.is_err());
    }
}
