//! In-memory stand-in for the Stellar Burgers backend.
//!
//! Serves the endpoints the scenarios exercise with the same status codes and
//! messages as the deployed service, so the suite can run without network
//! access. State lives for as long as the server does.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod routes;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

use store::StubStore;

#[derive(Clone, Default)]
pub struct StubState {
    pub store: Arc<StubStore>,
}

pub fn router(state: StubState) -> Router {
    Router::new()
        .nest("/api/auth", routes::auth::router())
        .nest("/api/ingredients", routes::ingredients::router())
        .nest("/api/orders", routes::orders::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A stub backend bound to an ephemeral local port.
///
/// Dropping the handle shuts the server down.
pub struct StubServer {
    pub base_url: String,
    _shutdown_tx: oneshot::Sender<()>,
}

impl StubServer {
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_on("127.0.0.1:0".parse()?).await
    }

    pub async fn spawn_on(addr: SocketAddr) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        let app = router(StubState::default());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let shutdown = async {
                // Resolves on send or when the handle is dropped.
                let _ = shutdown_rx.await;
            };
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                tracing::error!("Stub backend stopped: {}", e);
            }
        });

        tracing::debug!("Stub backend listening on {}", base_url);

        Ok(Self {
            base_url,
            _shutdown_tx: shutdown_tx,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiClient;

    #[tokio::test]
    async fn spawned_server_answers_over_http() {
        let server = StubServer::spawn().await.unwrap();
        let client = ApiClient::direct(server.base_url.clone()).unwrap();

        let ingredients = client.ingredients().get_available_ingredients().await.unwrap();

        assert!(ingredients.success);
        assert_eq!(ingredients.data.len(), catalog::ingredients().len());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = StubServer::spawn().await.unwrap();
        let client = ApiClient::direct(server.base_url.clone()).unwrap();

        let response = client.get("/api/nothing").send().await.unwrap();
        response.assert_status(404);
    }
}
