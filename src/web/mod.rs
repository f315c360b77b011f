//! HTTP service
//!
//! JSON endpoints over a shared [`Decoder`]. The decoder is immutable, so handlers share it
//! through an `Arc` without locking.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use self::config::*;
pub use handlers::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::core::Decoder;
use crate::error::{DecodeError, DecoderResult};

pub struct WebServer {
    config: WebConfig,
    decoder: Decoder,
}

impl WebServer {
    pub fn new(config: WebConfig, decoder: Decoder) -> Self {
        Self { config, decoder }
    }

    pub async fn start(self) -> DecoderResult<()> {
        let address = format!("{}:{}", self.config.bind_addr, self.config.port);
        let app = build_app(AppState::new(self.decoder, self.config.max_text_length));

        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .map_err(|e| DecodeError::ConfigError(format!("failed to bind {}: {}", address, e)))?;

        tracing::info!("Web server starting at http://{}", address);

        axum::serve(listener, app)
            .await
            .map_err(|e| DecodeError::ConfigError(format!("server error: {}", e)))?;

        Ok(())
    }
}

/// Router with state and CORS attached, ready to serve or to drive in tests
pub fn build_app(state: AppState) -> Router {
    create_routes()
        .with_state(Arc::new(state))
        .layer(CorsLayer::permissive())
}
