//! Decode orchestration
//!
//! [`Decoder`] wires the stages together: resolve language and region, classify tone,
//! annotate slang, compose the explanation, attach quick-reply guidance. It holds no mutable
//! state, so one instance can serve any number of threads.

use std::sync::Arc;

use chrono::Utc;
use rayon::prelude::*;

use crate::compose::ExplanationComposer;
use crate::config::DecoderConfig;
use crate::detector::LanguageDetector;
use crate::error::{DecodeError, DecoderResult};
use crate::gloss::{GlossaryTranslator, Translator};
use crate::guidance::suggested_responses;
use crate::slang::SlangAnnotator;
use crate::tone::ToneClassifier;
use crate::types::{DecodeRequest, DecodeResult, DEFAULT_REGION};

pub struct Decoder {
    config: DecoderConfig,
    detector: LanguageDetector,
    classifier: ToneClassifier,
    annotator: SlangAnnotator,
    composer: ExplanationComposer,
}

impl Decoder {
    /// Builds a decoder with the glossary translator
    pub fn new(config: DecoderConfig) -> DecoderResult<Self> {
        Self::with_translator(config, Arc::new(GlossaryTranslator::new()))
    }

    /// Builds a decoder that renders the "Translation" block with `translator`
    pub fn with_translator(
        config: DecoderConfig,
        translator: Arc<dyn Translator>,
    ) -> DecoderResult<Self> {
        config.validate()?;

        let classifier = ToneClassifier::from_config(&config)?;
        let composer = ExplanationComposer::new(translator, config.max_explained_terms);

        Ok(Self {
            config,
            detector: LanguageDetector::new(),
            classifier,
            annotator: SlangAnnotator::new(),
            composer,
        })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one message
    ///
    /// Fails only when `request.text` is blank. A caller-supplied source language skips
    /// detection and takes the caller's region, or "General".
    pub fn decode(&self, request: &DecodeRequest) -> DecoderResult<DecodeResult> {
        if request.text.trim().is_empty() {
            return Err(DecodeError::InvalidInput(
                "message text is required".to_string(),
            ));
        }

        let text = request.text.as_str();
        let (language, region) = match request
            .source_language
            .as_deref()
            .map(str::trim)
            .filter(|language| !language.is_empty())
        {
            Some(language) => (
                language.to_string(),
                request
                    .region
                    .as_deref()
                    .map(str::trim)
                    .filter(|region| !region.is_empty())
                    .unwrap_or(DEFAULT_REGION)
                    .to_string(),
            ),
            None => {
                let detection = self.detector.detect(text);
                (
                    detection.language.name().to_string(),
                    detection.region.to_string(),
                )
            }
        };

        let tone_tags = self.classifier.classify(text);
        let slang_items = self.annotator.annotate(text, &language);
        let plain_explanation = self
            .composer
            .compose(text, &language, &tone_tags, &slang_items);

        let suggested = if self.config.suggest_responses {
            Some(suggested_responses(&tone_tags))
        } else {
            None
        };

        Ok(DecodeResult {
            original_text: request.text.clone(),
            detected_language: language,
            region,
            plain_explanation,
            slang_items,
            tone_tags,
            suggested_responses: suggested,
            created_at: Utc::now(),
        })
    }

    /// Language and region only, no tone or explanation
    pub fn detect_language(&self, text: &str) -> (String, String) {
        let detection = self.detector.detect(text);
        (
            detection.language.name().to_string(),
            detection.region.to_string(),
        )
    }

    /// Decodes every request in parallel; results keep the input order
    pub fn decode_batch(&self, requests: &[DecodeRequest]) -> Vec<DecoderResult<DecodeResult>> {
        requests
            .par_iter()
            .map(|request| self.decode(request))
            .collect()
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            config: DecoderConfig::default(),
            detector: LanguageDetector::new(),
            classifier: ToneClassifier::new(),
            annotator: SlangAnnotator::new(),
            composer: ExplanationComposer::default(),
        }
    }
}

/// Rejects messages longer than `max_chars` characters
///
/// Applied by the CLI and HTTP layers before decoding.
pub fn check_text_length(text: &str, max_chars: usize) -> DecoderResult<()> {
    let length = text.chars().count();
    if length > max_chars {
        return Err(DecodeError::InvalidInput(format!(
            "message is {} characters, the limit is {}",
            length, max_chars
        )));
    }
    Ok(())
}

/// Decodes with a default [`Decoder`]
pub fn decode(request: &DecodeRequest) -> DecoderResult<DecodeResult> {
    Decoder::default().decode(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToneLabel;

    struct Shouting;

    impl Translator for Shouting {
        fn gloss(&self, text: &str, _language: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let decoder = Decoder::default();
        for text in ["", "   ", "\n\t"] {
            let error = decoder.decode(&DecodeRequest::new(text)).unwrap_err();
            assert_eq!(
                error,
                DecodeError::InvalidInput("message text is required".to_string())
            );
        }
    }

    #[test]
    fn test_override_skips_detection() {
        let decoder = Decoder::default();

        let result = decoder
            .decode(&DecodeRequest::new("hola").with_source_language("French"))
            .unwrap();
        assert_eq!(result.detected_language, "French");
        assert_eq!(result.region, "General");

        let result = decoder
            .decode(
                &DecodeRequest::new("hola")
                    .with_source_language("Spanish")
                    .with_region("Mexico"),
            )
            .unwrap();
        assert_eq!(result.region, "Mexico");
    }

    #[test]
    fn test_blank_override_region_falls_back_to_general() {
        let decoder = Decoder::default();

        for region in ["", "   ", "\t"] {
            let result = decoder
                .decode(
                    &DecodeRequest::new("hola")
                        .with_source_language("Spanish")
                        .with_region(region),
                )
                .unwrap();
            assert_eq!(result.region, "General", "region {:?}", region);
        }

        let result = decoder
            .decode(
                &DecodeRequest::new("hola")
                    .with_source_language("Spanish")
                    .with_region("  Mexico "),
            )
            .unwrap();
        assert_eq!(result.region, "Mexico");
    }

    #[test]
    fn test_region_without_language_is_ignored() {
        let result = Decoder::default()
            .decode(&DecodeRequest::new("ciao").with_region("Mexico"))
            .unwrap();
        assert_eq!(result.detected_language, "Italian");
        assert_eq!(result.region, "Italy");
    }

    #[test]
    fn test_injected_translator() {
        let decoder = Decoder::with_translator(DecoderConfig::default(), Arc::new(Shouting)).unwrap();
        let result = decoder.decode(&DecodeRequest::new("ciao bella")).unwrap();
        assert!(result
            .plain_explanation
            .starts_with("**Translation:** \"CIAO BELLA\""));
    }

    #[test]
    fn test_suggestions_can_be_disabled() {
        let config = DecoderConfig {
            suggest_responses: false,
            ..Default::default()
        };
        let decoder = Decoder::new(config).unwrap();
        let result = decoder.decode(&DecodeRequest::new("thank you!")).unwrap();

        assert_eq!(result.tone_tags, vec![ToneLabel::Grateful]);
        assert!(result.suggested_responses.is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DecoderConfig {
            max_tones: 0,
            ..Default::default()
        };
        assert!(matches!(
            Decoder::new(config),
            Err(DecodeError::ConfigError(_))
        ));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        assert!(check_text_length("привет", 6).is_ok());
        assert!(matches!(
            check_text_length("привет!", 6),
            Err(DecodeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_batch_keeps_order() {
        let decoder = Decoder::default();
        let requests = vec![
            DecodeRequest::new("ciao"),
            DecodeRequest::new(" "),
            DecodeRequest::new("привет"),
        ];
        let results = decoder.decode_batch(&requests);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().detected_language, "Italian");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().detected_language, "Russian");
    }
}
