use axum::{
    extract::{Path, Query},
    Json,
};
use axum_macros::{FromRequest, FromRequestParts};

use crate::app::models::api_error::ApiError;

/// `Json` body whose rejections render as `ApiError`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);

/// `Query` string whose rejections render as `ApiError`.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct QueryFromRequest<T>(pub T);

/// `Path` parameters whose rejections render as `ApiError`.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct PathFromRequest<T>(pub T);
