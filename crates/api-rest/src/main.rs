//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when only the API is needed. The
//! workspace's main `medrec-run` binary is the usual entrypoint and serves
//! the same router.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};

/// Main entry point for the medrec REST API server.
///
/// Starts the REST API server on the configured address with Swagger
/// documentation and stores seeded from the embedded sample data.
///
/// # Environment Variables
/// - `MEDREC_ADDR`: Server address (default: "0.0.0.0:3001")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the embedded seed data fails to parse,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDREC_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into());

    tracing::info!("-- Starting medrec REST API on {}", addr);

    let state = AppState::seeded().map_err(anyhow::Error::from)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
