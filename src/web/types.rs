//! Web state and payloads that are not part of the decoder data model

use serde::{Deserialize, Serialize};

use crate::core::Decoder;

pub struct AppState {
    pub decoder: Decoder,
    /// Longest accepted message, in characters
    pub max_text_length: usize,
}

impl AppState {
    pub fn new(decoder: Decoder, max_text_length: usize) -> Self {
        Self {
            decoder,
            max_text_length,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectResponse {
    pub language: String,
    pub region: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
