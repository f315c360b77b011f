// Shared helpers for integration tests

use wassup::{DecodeRequest, DecodeResult, Decoder, DecoderConfig, ToneLabel};

/// Messages used across suites, keyed by what they exercise
pub mod fixtures {
    pub const SPANISH_GREETING: &str = "¡Hola hermosa! Eres increíble bb";
    pub const ENGLISH_HYPE: &str = "omg lol that's so fire 🔥";
    pub const INSULT: &str = "fuck you idiot";
    pub const QUESTION_REQUEST: &str = "can you show me more?";
    pub const GRATEFUL: &str = "thank you so much";
}

pub fn decoder() -> Decoder {
    Decoder::default()
}

pub fn decoder_with(config: DecoderConfig) -> Decoder {
    Decoder::new(config).expect("test config must be valid")
}

pub fn decode_text(text: &str) -> DecodeResult {
    decoder()
        .decode(&DecodeRequest::new(text))
        .unwrap_or_else(|e| panic!("decoding {:?} failed: {}", text, e))
}

pub fn slang_terms(result: &DecodeResult) -> Vec<&str> {
    result.slang_items.iter().map(|item| item.term.as_str()).collect()
}

pub fn assert_has_tone(result: &DecodeResult, tone: ToneLabel) {
    assert!(
        result.tone_tags.contains(&tone),
        "expected {} in {:?} for {:?}",
        tone,
        result.tone_tags,
        result.original_text
    );
}

/// Text of one `**Heading:** body` block from an explanation
pub fn block<'a>(explanation: &'a str, heading: &str) -> Option<&'a str> {
    let marker = format!("**{}:** ", heading);
    explanation
        .split("\n\n")
        .find_map(|block| block.strip_prefix(marker.as_str()))
}
