use tracing_subscriber::EnvFilter;

/// Subscriber for the `burgers-stub` binary. `RUST_LOG` adds to the defaults.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("burgers_stub=info".parse()?)
                .add_directive("stellar_burgers_harness=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();
    Ok(())
}

/// Subscriber for tests: captured by the test runner, safe to call from every test.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stellar_burgers_harness=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
