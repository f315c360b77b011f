//! Decode and detect endpoints

use std::sync::Arc;

use axum::{
    extract::{Json as ExtractJson, State},
    response::Json,
};

use crate::core::check_text_length;
use crate::error::helpers::{log_error, validation_error};
use crate::types::{DecodeRequest, DecodeResult};
use crate::web::handlers::{error_response, ApiError};
use crate::web::types::{AppState, DetectRequest, DetectResponse};

pub async fn decode_message(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<DecodeRequest>,
) -> Result<Json<DecodeResult>, ApiError> {
    check_text_length(&request.text, state.max_text_length)
        .and_then(|_| state.decoder.decode(&request))
        .or_else(log_error)
        .map(|result| {
            tracing::debug!(
                "Decoded message: language={} tones={:?}",
                result.detected_language,
                result.tone_tags
            );
            Json(result)
        })
        .map_err(error_response)
}

pub async fn detect_language(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(error_response(validation_error("message text is required")));
    }
    check_text_length(&request.text, state.max_text_length).map_err(error_response)?;

    let (language, region) = state.decoder.detect_language(&request.text);
    Ok(Json(DetectResponse { language, region }))
}
