use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::{
        models::api_error::ApiError,
        structs::from_request::{JsonFromRequest, PathFromRequest, QueryFromRequest},
    },
    AppState,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    models::{
        create_transaction_response::CreateTransactionResponse, transaction::Transaction,
        wallet_balance::WalletBalance,
    },
    service,
};

pub async fn get_balance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WalletBalance>, ApiError> {
    match service::get_balance(&state).await {
        Ok(balance) => Ok(Json(balance)),
        Err(e) => Err(e),
    }
}

pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), ApiError> {
    if let Err(e) = dto.validate() {
        return Err(e.into());
    }

    match service::create_transaction(&dto, &state).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(response))),
        Err(e) => Err(e),
    }
}

pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(e.into());
    }

    match service::get_transactions(&dto, &state).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn get_transaction_by_id(
    State(state): State<Arc<AppState>>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<Transaction>, ApiError> {
    match service::get_transaction_by_id(id, &state).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}
