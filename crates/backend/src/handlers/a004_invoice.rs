use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use contracts::domain::a004_invoice::aggregate::{
    CreateInvoiceForm, InvoiceForm, InvoicesPage, UpdateInvoiceForm,
};

use super::{error_response, SearchParams};
use crate::domain::a004_invoice::error::FetchError;
use crate::domain::a004_invoice::service;
use crate::shared::actions::ActionOutcome;
use crate::shared::app_state::AppState;
use crate::shared::search::parse_page;

fn fetch_error(e: FetchError) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
}

/// GET /api/dashboard/invoices?query=&page=
pub async fn list_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<InvoicesPage>, Response> {
    let page = parse_page(params.page.as_deref());
    service::fetch_invoices_page(state.providers_api.as_ref(), &params.query, page)
        .await
        .map(Json)
        .map_err(fetch_error)
}

/// GET /api/dashboard/invoices/pages?query=
pub async fn total_pages(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<usize>, Response> {
    service::fetch_invoices_pages(state.providers_api.as_ref(), &params.query)
        .await
        .map(Json)
        .map_err(fetch_error)
}

/// GET /api/dashboard/invoices/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceForm>, StatusCode> {
    service::fetch_invoice_by_id(state.providers_api.as_ref(), &id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// POST /api/dashboard/invoices
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<CreateInvoiceForm>,
) -> ActionOutcome {
    service::create_invoice(
        state.customers_api.as_ref(),
        state.providers_api.as_ref(),
        &state.revalidator,
        &form,
    )
    .await
}

/// PUT /api/dashboard/invoices/:id
pub async fn update(Path(id): Path<String>, Json(form): Json<UpdateInvoiceForm>) -> ActionOutcome {
    service::update_invoice(&id, &form).await
}

/// DELETE /api/dashboard/invoices/:id
pub async fn delete(Path(id): Path<String>) -> ActionOutcome {
    service::delete_invoice(&id).await
}
