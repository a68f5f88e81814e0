//! HTTP surface: axum controllers, typed request params, the router, and the
//! domain-error to status-code mapping.

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use log::*;
use tower_http::cors::CorsLayer;

pub(crate) mod controller;
mod error;
pub(crate) mod params;
pub mod router;

pub use error::{Error, Result};
pub use service::AppState;

/// Binds the configured interface/port and serves the API router until the
/// process is stopped.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let interface = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = app_state.config.port;

    let origins: Vec<HeaderValue> = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {origin}: {e:?}");
                None
            }
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    let listener = tokio::net::TcpListener::bind(format!("{interface}:{port}")).await?;
    info!("Server listening on {interface}:{port}");

    axum::serve(listener, router::define_routes(app_state).layer(cors)).await
}
