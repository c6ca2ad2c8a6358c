use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::models::api_error::ApiError,
    wallet::{enums::transaction_type::TransactionType, models::transaction::Transaction},
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct GetTransactionsFilterDto {
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub sort: Option<String>,
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000."))]
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl GetTransactionsFilterDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql =
            "SELECT id, amount, type, description, created_at FROM transactions".to_string();

        let mut sort_field = "created_at".to_string();
        let mut sort_order = "DESC".to_string();
        let mut page_limit: u32 = 100;
        let mut page_offset: u32 = 0;

        // WHERE CLAUSES
        if self.transaction_type.is_some() {
            sql.push_str(" WHERE type = ?");
        }

        // SORT
        if let Some(sort) = &self.sort {
            let sort_params: Vec<&str> = sort.split(",").collect();

            if sort_params.len() != 2 {
                return Err(ApiError {
                    code: StatusCode::UNPROCESSABLE_ENTITY,
                    message: "Malformed sort query.".to_string(),
                });
            }
            if !Transaction::sortable_fields().contains(&sort_params[0]) {
                return Err(ApiError {
                    code: StatusCode::UNPROCESSABLE_ENTITY,
                    message: "Invalid sort field.".to_string(),
                });
            }

            sort_field = sort_params[0].to_string();
            sort_order = sort_params[1].to_uppercase();

            if sort_order != "ASC" && sort_order != "DESC" {
                return Err(ApiError {
                    code: StatusCode::UNPROCESSABLE_ENTITY,
                    message: "Malformed sort query.".to_string(),
                });
            }
        }

        // ORDER BY
        sql.push_str(&[" ORDER BY ", &sort_field, " ", &sort_order].concat());
        sql.push_str(&[", id ", &sort_order].concat());

        // LIMIT
        if let Some(limit) = self.limit {
            page_limit = limit;
        }
        if let Some(offset) = self.offset {
            page_offset = offset;
        }

        sql.push_str(&[" LIMIT ", &page_limit.to_string()].concat());
        sql.push_str(&[" OFFSET ", &page_offset.to_string()].concat());

        tracing::debug!(sql);

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_newest_first() {
        let sql = GetTransactionsFilterDto::default().to_sql().unwrap();

        assert_eq!(
            sql,
            "SELECT id, amount, type, description, created_at FROM transactions ORDER BY created_at DESC, id DESC LIMIT 100 OFFSET 0"
        );
    }

    #[test]
    fn applies_type_filter_and_window() {
        let dto = GetTransactionsFilterDto {
            transaction_type: Some(TransactionType::Expense),
            sort: Some("amount,asc".to_string()),
            limit: Some(10),
            offset: Some(20),
        };

        assert_eq!(
            dto.to_sql().unwrap(),
            "SELECT id, amount, type, description, created_at FROM transactions WHERE type = ? ORDER BY amount ASC, id ASC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn rejects_unknown_sort_fields() {
        let dto = GetTransactionsFilterDto {
            sort: Some("description,asc".to_string()),
            ..Default::default()
        };
        assert_eq!(dto.to_sql().unwrap_err().code, StatusCode::UNPROCESSABLE_ENTITY);

        let dto = GetTransactionsFilterDto {
            sort: Some("created_at,sideways".to_string()),
            ..Default::default()
        };
        assert!(dto.to_sql().is_err());

        let dto = GetTransactionsFilterDto {
            sort: Some("created_at".to_string()),
            ..Default::default()
        };
        assert!(dto.to_sql().is_err());
    }

    #[test]
    fn validates_limit_range() {
        let dto = GetTransactionsFilterDto {
            limit: Some(0),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = GetTransactionsFilterDto {
            limit: Some(1000),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
