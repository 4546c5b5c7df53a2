use stellar_burgers_core::{
    AccessToken, OrderCreateRequest, OrderCreateResponse, UserLoginResponse, UserOrdersResponse,
};

use super::{ALL_ORDERS_PATH, ORDERS_PATH};
use crate::client::{ApiClient, ValidatableResponse};
use crate::error::Result;

pub struct OrderApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrderApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// POST /api/orders, anonymous when `token` is `None`.
    pub async fn create_order_request(
        &self,
        token: Option<&AccessToken>,
        request: &OrderCreateRequest,
    ) -> Result<ValidatableResponse> {
        self.client
            .post(ORDERS_PATH)
            .authorization(token)
            .json(request)
            .send()
            .await
    }

    /// Order every ingredient in the catalog on behalf of the logged-in user.
    pub async fn create_order(&self, session: &UserLoginResponse) -> Result<OrderCreateResponse> {
        let ingredients = self.client.ingredients().available_ingredient_ids().await?;
        let request = OrderCreateRequest::new(ingredients);

        self.create_order_request(Some(&session.access_token), &request)
            .await?
            .json()
    }

    /// GET /api/orders
    pub async fn user_orders(&self, token: Option<&AccessToken>) -> Result<ValidatableResponse> {
        self.client.get(ORDERS_PATH).authorization(token).send().await
    }

    /// GET /api/orders/all, the public feed.
    pub async fn all_orders(&self) -> Result<UserOrdersResponse> {
        self.client.get(ALL_ORDERS_PATH).fetch().await
    }
}
