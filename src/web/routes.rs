//! Route table

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/decode", post(decode_message))
        .route("/api/detect", post(detect_language))
        .route("/api/languages", get(list_languages))
        .route("/api/regions", get(list_regions))
}
