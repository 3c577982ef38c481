use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use reservation_desk::config::AppConfig;
use reservation_desk::handlers;
use reservation_desk::services::api::http::HttpApi;
use reservation_desk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let api = HttpApi::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.api_timeout_secs),
    )?;
    tracing::info!("using reservation API at {}", api.base_url());

    let state = Arc::new(AppState {
        config: config.clone(),
        api: Box::new(api),
    });

    let app = handlers::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
