//! Quoting and scheduling backend for the Maid For Heaven cleaning
//! service.
//!
//! The marketing site's booking widget talks to this service over JSON:
//! price quotes (two engines, see [`quoting`]), appointment conflict
//! checks (see [`calendar`]), and booking submission (see [`booking`]).
//! Payment capture, email/SMS, and the real calendar backend are external
//! collaborators.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod booking;
pub mod calendar;
pub mod config;
pub mod error;
pub mod quoting;

use calendar::source::CalendarSource;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub calendar: Arc<dyn CalendarSource>,
}

/// Build the application router.
///
/// The booking widget is served from a separate static host, so CORS is
/// wide open.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(quoting::router())
        .merge(calendar::router())
        .merge(booking::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
