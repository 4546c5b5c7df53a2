use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// Registration body. Also sent as the PATCH /api/auth/user body, where any
// subset of the fields may be changed. Missing fields are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserCreateRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            name: Some(name.into()),
        }
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Credentials for logging in as this user, if both email and password are set.
    pub fn login_request(&self) -> Option<UserLoginRequest> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some(UserLoginRequest::new(email, password)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLoginRequest {
    pub email: String,
    pub password: String,
}

impl UserLoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Opaque session credential. The backend hands out "Bearer <jwt>" and expects
// the exact same string back in the Authorization header.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tokens end up in test logs; keep only the scheme visible.
        match self.0.split_once(' ') {
            Some((scheme, _)) => write!(f, "AccessToken({} ***)", scheme),
            None => f.write_str("AccessToken(***)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginResponse {
    pub success: bool,
    pub access_token: AccessToken,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

// Reply of GET/PATCH /api/auth/user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

// Any `success: false` reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreateRequest {
    pub ingredients: Vec<String>,
}

impl OrderCreateRequest {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self { ingredients }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub number: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreateResponse {
    pub success: bool,
    pub name: String,
    pub order: CreatedOrder,
}

// Catalog item as served by GET /api/ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub proteins: u32,
    #[serde(default)]
    pub fat: u32,
    #[serde(default)]
    pub carbohydrates: u32,
    #[serde(default)]
    pub calories: u32,
    pub price: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_mobile: String,
    #[serde(default)]
    pub image_large: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetIngredientsResponse {
    pub success: bool,
    pub data: Vec<Ingredient>,
}

impl GetIngredientsResponse {
    pub fn ids(&self) -> Vec<String> {
        self.data.iter().map(|i| i.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub ingredients: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
    pub number: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Reply of GET /api/orders and GET /api/orders/all
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderSummary>,
    pub total: u64,
    pub total_today: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_are_omitted_from_body() {
        let request = UserCreateRequest::new("a@ya.ru", "pw", "n").without_email();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"password": "pw", "name": "n"}));
    }

    #[test]
    fn login_request_requires_email_and_password() {
        let full = UserCreateRequest::new("a@ya.ru", "pw", "n");
        assert_eq!(
            full.login_request(),
            Some(UserLoginRequest::new("a@ya.ru", "pw"))
        );
        assert_eq!(full.clone().without_password().login_request(), None);
        assert_eq!(full.without_email().login_request(), None);
    }

    #[test]
    fn login_response_reads_camel_case_tokens() {
        let resp: UserLoginResponse = serde_json::from_value(json!({
            "success": true,
            "accessToken": "Bearer abc.def",
            "refreshToken": "r1",
            "user": {"email": "a@ya.ru", "name": "test"},
            "extra": 1
        }))
        .unwrap();

        assert!(resp.success);
        assert_eq!(resp.access_token.as_str(), "Bearer abc.def");
        assert_eq!(resp.refresh_token.as_deref(), Some("r1"));
        assert_eq!(resp.user.unwrap().name, "test");
    }

    #[test]
    fn access_token_debug_hides_credential() {
        let token = AccessToken::new("Bearer secret-value");
        assert_eq!(format!("{:?}", token), "AccessToken(Bearer ***)");
    }

    #[test]
    fn access_token_debug_hides_token_without_scheme() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiJ9.secret-payload");
        let printed = format!("{:?}", token);

        assert_eq!(printed, "AccessToken(***)");
        assert!(!printed.contains("secret-payload"));
    }

    #[test]
    fn ingredients_use_underscore_id() {
        let resp: GetIngredientsResponse = serde_json::from_value(json!({
            "success": true,
            "data": [
                {
                    "_id": "61c0c5a71d1f82001bdaaa6d",
                    "name": "bun",
                    "type": "bun",
                    "price": 988,
                    "__v": 0
                },
                {"_id": "61c0c5a71d1f82001bdaaa6f", "name": "meat", "type": "main", "price": 1337}
            ]
        }))
        .unwrap();

        assert_eq!(
            resp.ids(),
            vec!["61c0c5a71d1f82001bdaaa6d", "61c0c5a71d1f82001bdaaa6f"]
        );
        assert_eq!(resp.data[0].kind, "bun");
    }

    #[test]
    fn orders_response_parses_timestamps() {
        let resp: UserOrdersResponse = serde_json::from_value(json!({
            "success": true,
            "orders": [{
                "_id": "6500aa",
                "ingredients": ["61c0c5a71d1f82001bdaaa6d"],
                "status": "done",
                "number": 12345,
                "createdAt": "2023-09-12T18:06:54.522Z",
                "updatedAt": "2023-09-12T18:06:55.012Z"
            }],
            "total": 100,
            "totalToday": 3
        }))
        .unwrap();

        assert_eq!(resp.orders[0].number, 12345);
        assert_eq!(resp.orders[0].name, None);
        assert_eq!(resp.total_today, 3);
    }
}
