use axum::extract::State;
use axum::Json;
use contracts::domain::a003_provider::aggregate::{ProviderField, ProviderForm};

use crate::domain::a003_provider::service;
use crate::shared::actions::ActionOutcome;
use crate::shared::app_state::AppState;

/// GET /api/dashboard/providers/options
pub async fn list_options(State(state): State<AppState>) -> Json<Vec<ProviderField>> {
    Json(service::fetch_providers(state.providers_api.as_ref()).await)
}

/// POST /api/dashboard/providers
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ProviderForm>,
) -> ActionOutcome {
    service::create_provider(state.providers_api.as_ref(), &state.revalidator, &form).await
}
