use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::shared::app_state::AppState;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    // ========================================
    // DASHBOARD (PROTECTED)
    // ========================================
    let dashboard = Router::new()
        // Overview
        .route("/overview/cards", get(handlers::d001_overview::cards))
        .route("/overview/revenue", get(handlers::d001_overview::revenue))
        .route(
            "/overview/latest-invoices",
            get(handlers::d001_overview::latest_invoices),
        )
        // A001 Customers
        .route(
            "/customers",
            get(handlers::a001_customer::list_filtered).post(handlers::a001_customer::create),
        )
        .route(
            "/customers/options",
            get(handlers::a001_customer::list_options),
        )
        .route(
            "/customers/:id",
            get(handlers::a001_customer::get_by_id)
                .put(handlers::a001_customer::update)
                .delete(handlers::a001_customer::delete),
        )
        // A002 Orders
        .route("/orders", post(handlers::a002_order::create))
        .route("/orders/options", get(handlers::a002_order::list_options))
        // A003 Providers
        .route("/providers", post(handlers::a003_provider::create))
        .route(
            "/providers/options",
            get(handlers::a003_provider::list_options),
        )
        // A004 Invoices
        .route(
            "/invoices",
            get(handlers::a004_invoice::list_page).post(handlers::a004_invoice::create),
        )
        .route("/invoices/pages", get(handlers::a004_invoice::total_pages))
        .route(
            "/invoices/:id",
            get(handlers::a004_invoice::get_by_id)
                .put(handlers::a004_invoice::update)
                .delete(handlers::a004_invoice::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            system::auth::middleware::require_auth,
        ));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(middleware::from_fn_with_state(
                state.auth.clone(),
                system::auth::middleware::require_auth,
            )),
        )
        .nest("/api/dashboard", dashboard)
        .with_state(state)
}
