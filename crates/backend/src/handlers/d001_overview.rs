use axum::extract::State;
use axum::Json;
use contracts::dashboards::d001_overview::{CardData, Revenue};
use contracts::domain::a004_invoice::aggregate::LatestInvoice;

use crate::dashboards::d001_overview::service;
use crate::shared::app_state::AppState;

/// GET /api/dashboard/overview/cards
pub async fn cards(State(state): State<AppState>) -> Json<CardData> {
    Json(service::fetch_card_data(state.customers_api.as_ref(), state.providers_api.as_ref()).await)
}

/// GET /api/dashboard/overview/revenue
pub async fn revenue() -> Json<Vec<Revenue>> {
    Json(service::fetch_revenue().await)
}

/// GET /api/dashboard/overview/latest-invoices
pub async fn latest_invoices(State(state): State<AppState>) -> Json<Vec<LatestInvoice>> {
    Json(service::fetch_latest_invoices(state.providers_api.as_ref()).await)
}
