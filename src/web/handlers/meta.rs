//! Health check and reference lists

use axum::response::Json;

use crate::tables::{common_regions, supported_languages};
use crate::web::types::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_languages() -> Json<&'static [&'static str]> {
    Json(supported_languages())
}

pub async fn list_regions() -> Json<&'static [&'static str]> {
    Json(common_regions())
}
