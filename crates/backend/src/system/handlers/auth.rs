use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::handlers::error_response;
use crate::shared::app_state::AppState;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;

const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Response> {
    let user = state
        .auth
        .verify_credentials(&request.email, &request.password)
        .map_err(|e| {
            tracing::error!("Credential check failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })?
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS))?;

    let access_token = jwt::generate_access_token(state.auth.jwt_secret(), &user).map_err(|e| {
        tracing::error!("Token generation failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    })?;

    tracing::info!("User {} logged in", user.email);
    Ok(Json(LoginResponse { access_token, user }))
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserInfo> {
    Json(user)
}
