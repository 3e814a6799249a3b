use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::{TokenClaims, UserInfo};

/// Текущий пользователь из claims, которые положил `require_auth`.
///
/// `async fn handler(CurrentUser(user): CurrentUser) -> ...`
pub struct CurrentUser(pub UserInfo);

impl From<&TokenClaims> for CurrentUser {
    fn from(claims: &TokenClaims) -> Self {
        Self(UserInfo {
            id: claims.sub.clone(),
            name: claims.name.clone(),
            email: claims.email.clone(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .map(CurrentUser::from)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
