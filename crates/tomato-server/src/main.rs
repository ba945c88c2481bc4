use anyhow::Context;
use tomato_server::{AppState, Config, create_app};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tomato_server=info,tomato_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.tmdb_api_key.is_empty() {
        warn!("TMDB_API_KEY is not set; every lookup will fail upstream");
    }

    let state = AppState::from_config(&config)
        .await
        .context("Failed to initialize application state")?;
    let app = create_app(state);

    let addr = config.bind_address();
    info!("Starting Rotten Tomatoes Trailers add-on on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
