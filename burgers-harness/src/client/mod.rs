pub mod response;

pub use response::ValidatableResponse;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use stellar_burgers_core::{AccessToken, HarnessConfig};

use crate::error::{HarnessError, Result};

/// Thin wrapper over `reqwest` bound to one backend base URL.
///
/// Every call is a single attempt with the client's default timeouts. Nothing
/// is retried and no status code is treated as an error here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Client that never goes through an HTTP proxy, for backends on this host.
    pub fn direct(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| HarnessError::Config(format!("cannot build HTTP client: {}", e)))?;
        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: Method, path: &str) -> ApiRequest<'_> {
        ApiRequest {
            client: self,
            method,
            path: path.to_string(),
            authorization: None,
            body: None,
        }
    }

    pub fn get(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    pub fn patch(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }
}

pub struct ApiRequest<'a> {
    client: &'a ApiClient,
    method: Method,
    path: String,
    authorization: Option<String>,
    body: Option<serde_json::Result<Vec<u8>>>,
}

impl<'a> ApiRequest<'a> {
    /// Send the token verbatim in the `Authorization` header.
    pub fn authorized(mut self, token: &AccessToken) -> Self {
        self.authorization = Some(token.as_str().to_string());
        self
    }

    /// Same as [`authorized`](Self::authorized), but a `None` token sends no header.
    pub fn authorization(self, token: Option<&AccessToken>) -> Self {
        match token {
            Some(token) => self.authorized(token),
            None => self,
        }
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_vec(body));
        self
    }

    pub async fn send(self) -> Result<ValidatableResponse> {
        let url = format!("{}{}", self.client.base_url, self.path);

        let mut req = self
            .client
            .client
            .request(self.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &self.authorization {
            req = req.header(AUTHORIZATION, token);
        }

        if let Some(body) = self.body {
            let bytes = body.map_err(|source| HarnessError::Encode {
                path: self.path.clone(),
                source,
            })?;
            req = req.body(bytes);
        }

        let transport = |source| HarnessError::Transport {
            path: self.path.clone(),
            source,
        };
        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;

        tracing::debug!(
            method = %self.method,
            path = %self.path,
            status = status.as_u16(),
            authorized = self.authorization.is_some(),
            "backend call"
        );

        Ok(ValidatableResponse::new(self.method, self.path, status, text))
    }

    /// Send and deserialize the body, whatever the status code.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T> {
        self.send().await?.json()
    }
}
