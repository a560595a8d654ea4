use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};

/// Main entry point for the medrec application.
///
/// Starts the REST server with stores seeded from the embedded sample data.
/// Endpoints live under `/api`; Swagger UI is served at `/swagger-ui`.
///
/// # Environment Variables
/// - `MEDREC_ADDR`: REST server address (default: "0.0.0.0:3001")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medrec=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDREC_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into());

    tracing::info!("++ Starting medrec REST API on {}", addr);

    let state = AppState::seeded().map_err(anyhow::Error::from)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
