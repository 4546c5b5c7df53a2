use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use stellar_burgers_core::MessageResponse;

use super::store::StoreError;

// Express' default error page, which is what the backend serves when a
// malformed ingredient id blows up its database cast.
const INTERNAL_ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Error</title>
</head>
<body>
<pre>Internal Server Error</pre>
</body>
</html>
"#;

#[derive(Debug)]
pub enum StubError {
    MissingFields,
    UserExists,
    InvalidCredentials,
    Unauthorized,
    EmailTaken,
    NoIngredients,
    UnknownIngredients,
    MalformedIngredient,
    Internal(String),
}

impl From<StoreError> for StubError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UserExists => StubError::UserExists,
            StoreError::InvalidCredentials => StubError::InvalidCredentials,
            StoreError::EmailTaken => StubError::EmailTaken,
            // A token outliving its account is treated as no token at all.
            StoreError::NotFound => StubError::Unauthorized,
            StoreError::Hash(msg) => StubError::Internal(msg),
        }
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            StubError::MissingFields => (
                StatusCode::FORBIDDEN,
                "Email, password and name are required fields".to_string(),
            ),
            StubError::UserExists => (StatusCode::FORBIDDEN, "User already exists".to_string()),
            StubError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "email or password are incorrect".to_string(),
            ),
            StubError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "You should be authorised".to_string(),
            ),
            StubError::EmailTaken => (
                StatusCode::FORBIDDEN,
                "User with such email already exists".to_string(),
            ),
            StubError::NoIngredients => (
                StatusCode::BAD_REQUEST,
                "Ingredient ids must be provided".to_string(),
            ),
            StubError::UnknownIngredients => (
                StatusCode::BAD_REQUEST,
                "One or more ids provided are incorrect".to_string(),
            ),
            StubError::MalformedIngredient => {
                return (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE))
                    .into_response();
            }
            StubError::Internal(e) => {
                tracing::error!("Stub backend failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e)
            }
        };

        let body = Json(MessageResponse {
            success: false,
            message,
        });

        (status, body).into_response()
    }
}
