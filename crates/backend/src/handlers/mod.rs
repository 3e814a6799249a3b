pub mod a001_customer;
pub mod a002_order;
pub mod a003_provider;
pub mod a004_invoice;
pub mod d001_overview;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Query-параметры списков: `?query=...&page=...`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<String>,
}

/// `{ "error": message }` с заданным статусом
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
