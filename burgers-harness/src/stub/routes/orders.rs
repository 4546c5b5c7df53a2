use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use stellar_burgers_core::{OrderSummary, UserOrdersResponse};

use crate::stub::catalog;
use crate::stub::error::StubError;
use crate::stub::extract::AuthorizedUser;
use crate::stub::store::StoredOrder;
use crate::stub::StubState;

#[derive(Debug, Deserialize)]
pub struct CreateOrderPayload {
    #[serde(default)]
    ingredients: Option<Vec<String>>,
}

fn summary(order: StoredOrder) -> OrderSummary {
    OrderSummary {
        id: order.id,
        ingredients: order.ingredients,
        status: order.status,
        name: Some(order.name),
        number: order.number,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

fn validate_ingredients(ids: &[String]) -> Result<(), StubError> {
    if ids.is_empty() {
        return Err(StubError::NoIngredients);
    }
    if !ids.iter().all(|id| catalog::is_object_id(id)) {
        return Err(StubError::MalformedIngredient);
    }
    if !ids.iter().all(|id| catalog::find(id).is_some()) {
        return Err(StubError::UnknownIngredients);
    }
    Ok(())
}

/// Anonymous orders get the short reply; an authorized caller also gets the
/// stored order with priced ingredients and the owner's profile.
pub async fn create_order(
    State(state): State<StubState>,
    owner: Option<AuthorizedUser>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<Json<Value>, StubError> {
    let ids = payload.ingredients.unwrap_or_default();
    validate_ingredients(&ids)?;

    let name = catalog::order_name(&ids);
    let owner = owner.map(|o| o.user);
    let order = state
        .store
        .create_order(owner.as_ref().map(|u| u.id.as_str()), ids, name.clone());

    let Some(owner) = owner else {
        return Ok(Json(json!({
            "success": true,
            "name": name,
            "order": { "number": order.number },
        })));
    };

    let ingredients: Vec<_> = order
        .ingredients
        .iter()
        .filter_map(|id| catalog::find(id))
        .collect();
    let price: u32 = ingredients.iter().map(|i| i.price).sum();

    Ok(Json(json!({
        "success": true,
        "name": name,
        "order": {
            "ingredients": ingredients,
            "_id": order.id,
            "owner": {
                "name": owner.name,
                "email": owner.email,
                "createdAt": order.created_at,
                "updatedAt": order.updated_at,
            },
            "status": order.status,
            "name": order.name,
            "createdAt": order.created_at,
            "updatedAt": order.updated_at,
            "number": order.number,
            "price": price,
        },
    })))
}

pub async fn user_orders(
    State(state): State<StubState>,
    AuthorizedUser { user }: AuthorizedUser,
) -> Json<UserOrdersResponse> {
    let (total, total_today) = state.store.user_order_totals(&user.id);
    let orders = state
        .store
        .orders_for(&user.id)
        .into_iter()
        .map(summary)
        .collect();

    Json(UserOrdersResponse {
        success: true,
        orders,
        total,
        total_today,
    })
}

pub async fn all_orders(State(state): State<StubState>) -> Json<UserOrdersResponse> {
    let (recent, total, total_today) = state.store.feed();

    Json(UserOrdersResponse {
        success: true,
        orders: recent.into_iter().map(summary).collect(),
        total,
        total_today,
    })
}

pub fn router() -> axum::Router<StubState> {
    use axum::routing::get;

    axum::Router::new()
        .route("/", get(user_orders).post(create_order))
        .route("/all", get(all_orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn server() -> TestServer {
        let app = axum::Router::new()
            .nest("/api/orders", router())
            .with_state(StubState::default());
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn anonymous_order_gets_short_reply() {
        let server = server();

        let response = server
            .post("/api/orders")
            .json(&json!({
                "ingredients": ["61c0c5a71d1f82001bdaaa6d", "61c0c5a71d1f82001bdaaa6f"]
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["name"], "Флюоресцентный люминесцентный бургер");
        assert!(body["order"]["number"].is_u64());
        assert!(body["order"].get("owner").is_none());
    }

    #[tokio::test]
    async fn missing_ingredients_field_is_rejected() {
        let server = server();

        let response = server.post("/api/orders").json(&json!({})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Ingredient ids must be provided");
    }

    #[tokio::test]
    async fn well_formed_unknown_id_is_a_bad_request() {
        let server = server();

        let response = server
            .post("/api/orders")
            .json(&json!({"ingredients": ["ffffffffffffffffffffffff"]}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "One or more ids provided are incorrect");
    }

    #[tokio::test]
    async fn malformed_id_is_an_html_server_error() {
        let server = server();

        let response = server
            .post("/api/orders")
            .json(&json!({"ingredients": ["not-an-id"]}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.text().contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn feed_lists_newest_first() {
        let server = server();
        for _ in 0..2 {
            server
                .post("/api/orders")
                .json(&json!({"ingredients": ["61c0c5a71d1f82001bdaaa6c"]}))
                .await
                .assert_status_ok();
        }

        let body: Value = server.get("/api/orders/all").await.json();

        assert_eq!(body["total"], 2);
        let first = body["orders"][0]["number"].as_u64().unwrap();
        let second = body["orders"][1]["number"].as_u64().unwrap();
        assert!(first > second);
    }
}
