use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use time_records::modules::time_records::adapters::outbound::in_memory_records::InMemoryTimeRecords;
use time_records::shared::core::clock::SystemClock;
use time_records::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
use time_records::shell::config::AppConfig;
use time_records::shell::http::router;
use time_records::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let users = match &config.seed_users_path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading seed users from {}", path.display()))?;
            InMemoryUserDirectory::from_seed_json(&json)
                .with_context(|| format!("parsing seed users from {}", path.display()))?
        }
        None => InMemoryUserDirectory::new(),
    };
    tracing::info!(users = users.count().await, "user directory ready");

    let state = AppState::new(
        Arc::new(users),
        Arc::new(InMemoryTimeRecords::new()),
        Arc::new(SystemClock),
    );
    let mut app = router(state);
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("binding {}", config.http_addr))?;
    tracing::info!(addr = %config.http_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
