use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};

use super::error::StubError;
use super::store::StoredUser;
use super::StubState;

/// Owner of the session named by the raw `Authorization` header.
pub struct AuthorizedUser {
    pub user: StoredUser,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizedUser
where
    StubState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = StubState::from_ref(state);

        let user = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|token| state.store.user_for_token(token))
            .ok_or_else(|| StubError::Unauthorized.into_response())?;

        Ok(AuthorizedUser { user })
    }
}
