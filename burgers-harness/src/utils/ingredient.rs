use stellar_burgers_core::GetIngredientsResponse;

use super::INGREDIENTS_PATH;
use crate::client::ApiClient;
use crate::error::Result;

pub struct IngredientApi<'a> {
    client: &'a ApiClient,
}

impl<'a> IngredientApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET /api/ingredients
    pub async fn get_available_ingredients(&self) -> Result<GetIngredientsResponse> {
        self.client.get(INGREDIENTS_PATH).fetch().await
    }

    /// Ids of the whole catalog, in catalog order.
    pub async fn available_ingredient_ids(&self) -> Result<Vec<String>> {
        Ok(self.get_available_ingredients().await?.ids())
    }
}
