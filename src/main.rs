use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use maidforheaven_web::calendar::FixedCalendar;
use maidforheaven_web::config::Config;
use maidforheaven_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // No calendar backend wired up yet, so conflict checks run against
    // the fixed sample schedule
    let state = AppState {
        calendar: Arc::new(FixedCalendar::sample_schedule()),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
