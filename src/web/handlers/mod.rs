//! Request handlers

pub mod decode;
pub mod meta;

pub use decode::*;
pub use meta::*;

use axum::{http::StatusCode, response::Json};

use crate::error::{DecodeError, ErrorCategory};

pub type ApiError = (StatusCode, Json<serde_json::Value>);

/// Input problems are the caller's fault, everything else is ours
pub fn error_response(error: DecodeError) -> ApiError {
    let status = match error.category() {
        ErrorCategory::Input => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": error.to_string() })))
}
