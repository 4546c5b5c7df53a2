use axum::Json;
use stellar_burgers_core::GetIngredientsResponse;

use crate::stub::catalog;
use crate::stub::StubState;

pub async fn list_ingredients() -> Json<GetIngredientsResponse> {
    Json(GetIngredientsResponse {
        success: true,
        data: catalog::ingredients(),
    })
}

pub fn router() -> axum::Router<StubState> {
    axum::Router::new().route("/", axum::routing::get(list_ingredients))
}
