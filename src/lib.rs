//! # Wassup
//!
//! Decodes chat messages: detects the language, ranks the tone, picks out slang and writes a
//! plain-language explanation with reply guidance.
//!
//! ## Modules
//!
//! - `core` - the [`Decoder`] that runs every stage
//! - `types` - request and result shapes
//! - `tables` - slang, tone, glossary and marker tables
//! - `detector`, `tone`, `slang`, `gloss`, `compose`, `guidance` - the individual stages
//! - `config` / `env` - file and environment configuration
//! - `web` - HTTP service (optional)
//!
//! ```
//! use wassup::{Decoder, DecodeRequest};
//!
//! let decoder = Decoder::default();
//! let result = decoder.decode(&DecodeRequest::new("ciao bella")).unwrap();
//! assert_eq!(result.detected_language, "Italian");
//! ```

pub mod compose;
pub mod config;
pub mod core;
pub mod detector;
pub mod env;
pub mod error;
pub mod gloss;
pub mod guidance;
pub mod slang;
pub mod tables;
pub mod tone;
pub mod types;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used items for convenience
pub use crate::config::{ConfigManager, DecoderConfig, ToneRuleConfig};
pub use crate::core::{decode, Decoder};
pub use crate::error::{DecodeError, DecoderResult};
pub use crate::gloss::{GlossaryTranslator, Translator};
pub use crate::guidance::QuickReply;
pub use crate::tables::{common_regions, supported_languages, Language};
pub use crate::types::*;
