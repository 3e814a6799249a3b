use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_customer::aggregate::{
    Customer, CustomerField, CustomerForm, CustomersTableRow,
};

use super::SearchParams;
use crate::domain::a001_customer::service;
use crate::shared::actions::ActionOutcome;
use crate::shared::app_state::AppState;

/// GET /api/dashboard/customers?query=
pub async fn list_filtered(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<CustomersTableRow>> {
    Json(service::fetch_filtered_customers(state.customers_api.as_ref(), &params.query).await)
}

/// GET /api/dashboard/customers/options
pub async fn list_options(State(state): State<AppState>) -> Json<Vec<CustomerField>> {
    Json(service::fetch_customers(state.customers_api.as_ref()).await)
}

/// GET /api/dashboard/customers/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, StatusCode> {
    service::fetch_customer_by_id(state.customers_api.as_ref(), &id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// POST /api/dashboard/customers
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<CustomerForm>,
) -> ActionOutcome {
    service::create_customer(state.customers_api.as_ref(), &state.revalidator, &form).await
}

/// PUT /api/dashboard/customers/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<CustomerForm>,
) -> ActionOutcome {
    service::update_customer(state.customers_api.as_ref(), &state.revalidator, &id, &form).await
}

/// DELETE /api/dashboard/customers/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ActionOutcome {
    service::delete_customer(state.customers_api.as_ref(), &state.revalidator, &id).await
}
