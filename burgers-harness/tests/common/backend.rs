use stellar_burgers_core::Target;
use stellar_burgers_harness::stub::StubServer;
use stellar_burgers_harness::telemetry::init_test_tracing;
use stellar_burgers_harness::{load_config, ApiClient};

/// Backend for one test: either the configured live service or a fresh stub.
///
/// The stub, if any, shuts down when this value is dropped.
pub struct TestBackend {
    client: ApiClient,
    _stub: Option<StubServer>,
}

impl TestBackend {
    /// # Panics
    ///
    /// Panics on invalid configuration or if the stub cannot bind a port.
    pub async fn start() -> Self {
        init_test_tracing();

        let config = load_config().expect("invalid harness configuration");
        match config.target {
            Target::Live => Self {
                client: ApiClient::from_config(&config),
                _stub: None,
            },
            Target::Stub => {
                let stub = StubServer::spawn()
                    .await
                    .expect("Failed to start stub backend");
                let client =
                    ApiClient::direct(stub.base_url.clone()).expect("Failed to build HTTP client");
                Self {
                    client,
                    _stub: Some(stub),
                }
            }
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }
}
