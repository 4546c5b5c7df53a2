//! One call per backend operation, composed from [`ApiClient`] and the DTOs.
//!
//! Nothing here translates errors: callers get the raw
//! [`ValidatableResponse`](crate::client::ValidatableResponse) or a
//! [`HarnessError`](crate::error::HarnessError).

pub mod ingredient;
pub mod order;
pub mod user;

pub use ingredient::IngredientApi;
pub use order::OrderApi;
pub use user::UserApi;

use crate::client::ApiClient;

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const USER_PATH: &str = "/api/auth/user";
pub const INGREDIENTS_PATH: &str = "/api/ingredients";
pub const ORDERS_PATH: &str = "/api/orders";
pub const ALL_ORDERS_PATH: &str = "/api/orders/all";

impl ApiClient {
    pub fn users(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    pub fn ingredients(&self) -> IngredientApi<'_> {
        IngredientApi::new(self)
    }

    pub fn orders(&self) -> OrderApi<'_> {
        OrderApi::new(self)
    }
}
