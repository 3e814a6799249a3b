use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use super::AuthSettings;

/// Middleware that requires valid JWT authentication
pub async fn require_auth(
    State(auth): State<Arc<AuthSettings>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = super::jwt::validate_token(auth.jwt_secret(), token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    // Claims доступны обработчикам через CurrentUser
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
