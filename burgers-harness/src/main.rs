use std::net::SocketAddr;

use stellar_burgers_harness::stub::{self, StubState};
use stellar_burgers_harness::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing()?;

    info!("Starting Stellar Burgers stub backend...");

    // Get port from environment
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    let app = stub::router(StubState::default());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on http://{}", addr);
    info!(
        "Point the suite at it with STELLAR_BURGERS_BASE_URL=http://127.0.0.1:{}",
        port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
