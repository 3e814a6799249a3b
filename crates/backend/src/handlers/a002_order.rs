use axum::extract::State;
use axum::Json;
use contracts::domain::a002_order::aggregate::{OrderForm, OrderOption};

use crate::domain::a002_order::service;
use crate::shared::actions::ActionOutcome;
use crate::shared::app_state::AppState;

/// GET /api/dashboard/orders/options
pub async fn list_options(State(state): State<AppState>) -> Json<Vec<OrderOption>> {
    Json(service::fetch_order_options(state.customers_api.as_ref()).await)
}

/// POST /api/dashboard/orders
pub async fn create(State(state): State<AppState>, Json(form): Json<OrderForm>) -> ActionOutcome {
    service::create_order(state.customers_api.as_ref(), &state.revalidator, &form).await
}
