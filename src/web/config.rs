//! Web server configuration
//!
//! Read from the typed environment variables in [`crate::env`].

use crate::env::{decoder, web, EnvResult, EnvVar};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub bind_addr: String,
    pub port: u16,
    pub max_text_length: usize,
}

impl WebConfig {
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            max_text_length: decoder::MaxTextLength::get()?,
        })
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: web::Port::DEFAULT.unwrap_or(7080),
            max_text_length: decoder::MaxTextLength::DEFAULT.unwrap_or(5000),
        }
    }
}
