use stellar_burgers_core::{
    AccessToken, UserCreateRequest, UserLoginRequest, UserLoginResponse, UserResponse,
};

use super::{LOGIN_PATH, REGISTER_PATH, USER_PATH};
use crate::client::{ApiClient, ValidatableResponse};
use crate::error::Result;

pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// POST /api/auth/register
    pub async fn create_user(&self, request: &UserCreateRequest) -> Result<ValidatableResponse> {
        self.client.post(REGISTER_PATH).json(request).send().await
    }

    /// POST /api/auth/login
    pub async fn login(&self, request: &UserLoginRequest) -> Result<ValidatableResponse> {
        self.client.post(LOGIN_PATH).json(request).send().await
    }

    /// Log in and decode the session. A rejected login fails to decode.
    pub async fn login_user(&self, request: &UserLoginRequest) -> Result<UserLoginResponse> {
        self.login(request).await?.json()
    }

    /// GET /api/auth/user
    pub async fn get_user(&self, token: Option<&AccessToken>) -> Result<ValidatableResponse> {
        self.client.get(USER_PATH).authorization(token).send().await
    }

    /// Fetch and decode the profile of the token's owner.
    pub async fn profile(&self, token: &AccessToken) -> Result<UserResponse> {
        self.get_user(Some(token)).await?.json()
    }

    /// PATCH /api/auth/user
    pub async fn update_user(
        &self,
        token: Option<&AccessToken>,
        change: &UserCreateRequest,
    ) -> Result<ValidatableResponse> {
        self.client
            .patch(USER_PATH)
            .authorization(token)
            .json(change)
            .send()
            .await
    }

    /// DELETE /api/auth/user
    pub async fn delete_authorized(&self, token: &AccessToken) -> Result<ValidatableResponse> {
        self.client.delete(USER_PATH).authorized(token).send().await
    }

    /// Best-effort removal: log in with the request's credentials, then delete.
    ///
    /// Returns `Ok(false)` when there was nothing to delete (incomplete
    /// credentials or a rejected login).
    pub async fn delete_user(&self, request: &UserCreateRequest) -> Result<bool> {
        let Some(credentials) = request.login_request() else {
            tracing::debug!("skipping delete of user without email or password");
            return Ok(false);
        };

        let login = self.login(&credentials).await?;
        if !login.status().is_success() {
            tracing::debug!(
                email = %credentials.email,
                status = login.status().as_u16(),
                "no account to delete"
            );
            return Ok(false);
        }
        let session: UserLoginResponse = login.json()?;

        let deleted = self.delete_authorized(&session.access_token).await?;
        if deleted.status().is_success() {
            tracing::debug!(email = %credentials.email, "deleted test user");
            Ok(true)
        } else {
            tracing::warn!(
                email = %credentials.email,
                status = deleted.status().as_u16(),
                "backend refused to delete test user"
            );
            Ok(false)
        }
    }
}
