use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use stellar_burgers_core::{
    AccessToken, MessageResponse, UserCreateRequest, UserLoginResponse, UserProfile, UserResponse,
};

use crate::stub::error::StubError;
use crate::stub::extract::AuthorizedUser;
use crate::stub::store::{Session, StoredUser};
use crate::stub::StubState;

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    email: Option<String>,
    password: Option<String>,
}

fn profile(user: &StoredUser) -> UserProfile {
    UserProfile {
        email: user.email.clone(),
        name: user.name.clone(),
    }
}

fn session_response(user: &StoredUser, session: Session) -> Json<UserLoginResponse> {
    Json(UserLoginResponse {
        success: true,
        access_token: AccessToken::new(session.access_token),
        refresh_token: Some(session.refresh_token),
        user: Some(profile(user)),
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

pub async fn register(
    State(state): State<StubState>,
    Json(payload): Json<UserCreateRequest>,
) -> Result<Json<UserLoginResponse>, StubError> {
    let (Some(email), Some(password), Some(name)) = (
        present(&payload.email),
        present(&payload.password),
        present(&payload.name),
    ) else {
        return Err(StubError::MissingFields);
    };

    let (user, session) = state.store.register(email, password, name)?;
    tracing::debug!(user_id = %user.id, "registered stub user");
    Ok(session_response(&user, session))
}

pub async fn login(
    State(state): State<StubState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<UserLoginResponse>, StubError> {
    let (Some(email), Some(password)) = (present(&payload.email), present(&payload.password))
    else {
        return Err(StubError::InvalidCredentials);
    };

    let (user, session) = state.store.login(email, password)?;
    Ok(session_response(&user, session))
}

pub async fn get_user(AuthorizedUser { user }: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse {
        success: true,
        user: profile(&user),
    })
}

pub async fn update_user(
    State(state): State<StubState>,
    AuthorizedUser { user }: AuthorizedUser,
    Json(change): Json<UserCreateRequest>,
) -> Result<Json<UserResponse>, StubError> {
    let updated = state.store.update_user(
        &user.id,
        present(&change.email),
        present(&change.password),
        present(&change.name),
    )?;

    Ok(Json(UserResponse {
        success: true,
        user: profile(&updated),
    }))
}

pub async fn delete_user(
    State(state): State<StubState>,
    AuthorizedUser { user }: AuthorizedUser,
) -> Result<(StatusCode, Json<MessageResponse>), StubError> {
    state.store.delete_user(&user.id)?;
    tracing::debug!(user_id = %user.id, "removed stub user");

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            success: true,
            message: "User successfully removed".to_string(),
        }),
    ))
}

pub fn router() -> axum::Router<StubState> {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/user", get(get_user).patch(update_user).delete(delete_user))
}
