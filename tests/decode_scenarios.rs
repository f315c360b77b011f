//! End-to-end decoding scenarios
//!
//! Runs whole messages through the default decoder and checks every part of the result.

use wassup::{DecodeRequest, FormalityLevel, ToneLabel};

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{assert_has_tone, block, decode_text, decoder, fixtures, slang_terms};

#[test]
fn test_spanish_greeting_with_compliment() {
    let result = decode_text(fixtures::SPANISH_GREETING);

    assert_eq!(result.detected_language, "Spanish");
    assert_eq!(result.region, "Latin America");
    assert_eq!(
        result.tone_tags,
        vec![ToneLabel::Compliment, ToneLabel::Flirty, ToneLabel::Friendly]
    );
    assert_eq!(slang_terms(&result), vec!["bb", "hermosa"]);
    assert_eq!(result.slang_items[0].meaning, "Baby/babe");
    assert_eq!(result.slang_items[0].region, "Latin America");

    let explanation = &result.plain_explanation;
    assert_eq!(
        block(explanation, "Translation"),
        Some("\"¡[hello] [beautiful]! [you are] increíble [baby]\"")
    );
    assert_eq!(block(explanation, "Language"), Some("Spanish"));
    assert_eq!(
        block(explanation, "What they're saying"),
        Some("This viewer is greeting you with a compliment. They're saying hello and telling you that you look attractive.")
    );
    assert_eq!(
        block(explanation, "Tone"),
        Some("The overall tone is compliment with hints of flirty and friendly.")
    );
    assert_eq!(
        block(explanation, "Key terms used"),
        Some("\"bb\" means \"Baby/babe\" (Common term of endearment); \"hermosa\" means \"Beautiful\" (Romantic compliment).")
    );
    assert_eq!(
        block(explanation, "How to respond"),
        Some("They're being flirty and trying to get your attention. A simple \"thank you\" or playful response works well if you want to engage.")
    );
}

#[test]
fn test_english_internet_slang() {
    let result = decode_text(fixtures::ENGLISH_HYPE);

    assert_eq!(result.detected_language, "English");
    assert_eq!(result.region, "General");
    assert_has_tone(&result, ToneLabel::Joke);
    assert_has_tone(&result, ToneLabel::Excited);
    assert_eq!(
        result.tone_tags,
        vec![ToneLabel::Flirty, ToneLabel::Joke, ToneLabel::Excited]
    );
    assert_eq!(slang_terms(&result), vec!["lol", "fire"]);

    let explanation = &result.plain_explanation;
    assert!(!explanation.contains("**Translation:**"));
    assert!(!explanation.contains("**Language:**"));
    assert_eq!(
        block(explanation, "What they're saying"),
        Some("This viewer is being flirtatious and showing romantic interest.")
    );
    assert_eq!(
        block(explanation, "How to respond"),
        Some("They're being playful. A light response or emoji reaction works well.")
    );
}

#[test]
fn test_insult_dominates() {
    let result = decode_text(fixtures::INSULT);

    assert_eq!(result.dominant_tone(), ToneLabel::Insult);
    assert_eq!(
        block(&result.plain_explanation, "How to respond"),
        Some("This is a negative or disrespectful message. Consider ignoring, blocking, or setting a firm boundary if this behavior continues.")
    );

    let both = decode_text("stupid idiot");
    assert_eq!(both.tone_tags, vec![ToneLabel::Insult, ToneLabel::Rude]);
}

#[test]
fn test_question_with_request() {
    let result = decode_text(fixtures::QUESTION_REQUEST);

    assert_has_tone(&result, ToneLabel::Question);
    assert_has_tone(&result, ToneLabel::Request);
    assert_eq!(
        result.tone_tags,
        vec![ToneLabel::Sexual, ToneLabel::Request, ToneLabel::Question]
    );
    assert_eq!(
        block(&result.plain_explanation, "What they're saying"),
        Some("This viewer is asking you a question and wants a response.")
    );
    assert!(block(&result.plain_explanation, "How to respond")
        .unwrap()
        .starts_with("This message has sexual content."));
}

#[test]
fn test_dominant_tone_fallback() {
    let result = decode_text(fixtures::GRATEFUL);

    assert_eq!(result.tone_tags, vec![ToneLabel::Grateful]);
    assert_eq!(
        block(&result.plain_explanation, "What they're saying"),
        Some("This viewer is expressing gratitude and appreciation.")
    );
    assert_eq!(
        block(&result.plain_explanation, "Tone"),
        Some("The overall tone is grateful.")
    );
    assert!(block(&result.plain_explanation, "Key terms used").is_none());
}

#[test]
fn test_no_signal_is_neutral() {
    let result = decode_text("see u at 5");

    assert_eq!(result.tone_tags, vec![ToneLabel::Neutral]);
    assert!(result.slang_items.is_empty());
    assert_eq!(
        block(&result.plain_explanation, "How to respond"),
        Some("This is a casual interaction. Respond naturally based on your mood and the conversation flow.")
    );
}

#[test]
fn test_internet_slang_fallback_without_duplicates() {
    // Portuguese table has "oi bb", not "bb", so the internet entry is added
    let result = decode_text("gata linda bb");
    assert_eq!(result.detected_language, "Portuguese");
    assert_eq!(slang_terms(&result), vec!["gata", "linda", "bb"]);
    assert_eq!(result.slang_items[2].region, "Internet");
    assert_eq!(result.slang_items[0].formality_level, FormalityLevel::Informal);

    let result = decode_text("ciao bella lol");
    assert_eq!(slang_terms(&result), vec!["bella", "ciao bella", "lol"]);
}

#[test]
fn test_script_detection_drives_tables() {
    let result = decode_text("사랑해 ㅋㅋㅋ");

    assert_eq!(result.detected_language, "Korean");
    assert_eq!(result.region, "South Korea");
    assert_eq!(slang_terms(&result), vec!["사랑해", "ㅋㅋㅋ"]);
    assert_has_tone(&result, ToneLabel::Joke);
    assert_eq!(
        block(&result.plain_explanation, "What they're saying"),
        Some("This viewer is expressing romantic feelings or strong affection toward you.")
    );
}

#[test]
fn test_language_override() {
    let decoder = decoder();
    let request = DecodeRequest::new("bonjour")
        .with_source_language("French")
        .with_region("Canada");
    let result = decoder.decode(&request).unwrap();

    assert_eq!(result.detected_language, "French");
    assert_eq!(result.region, "Canada");
    assert_eq!(
        block(&result.plain_explanation, "Translation"),
        Some("\"[hello/good day]\"")
    );
}

#[test]
fn test_tone_tags_never_empty() {
    for text in ["a", "…", "🙂", "12:30", "?", "x".repeat(500).as_str()] {
        let result = decode_text(text);
        assert!(!result.tone_tags.is_empty(), "no tones for {:?}", text);
        assert!(result.tone_tags.len() <= 4);
    }
}

#[test]
fn test_decoding_is_deterministic() {
    let decoder = decoder();
    let request = DecodeRequest::new("Hey beautiful, can you show me more? lol 😍");

    let first = decoder.decode(&request).unwrap();
    let second = decoder.decode(&request).unwrap();

    assert_eq!(first.tone_tags, second.tone_tags);
    assert_eq!(first.slang_items, second.slang_items);
    assert_eq!(first.plain_explanation, second.plain_explanation);
    assert_eq!(first.suggested_responses, second.suggested_responses);
}

#[test]
fn test_suggested_responses_follow_tones() {
    let result = decode_text(fixtures::QUESTION_REQUEST);
    let suggestions = result.suggested_responses.expect("enabled by default");

    assert_eq!(suggestions.len(), 4);
    assert_eq!(
        suggestions[2],
        "Politely but firmly set a boundary. Keep it respectful."
    );

    let neutral = decode_text("see u at 5");
    assert_eq!(
        neutral.suggested_responses,
        Some(vec![
            "It's okay to ignore messages that make you uncomfortable.".to_string()
        ])
    );
}

#[test]
fn test_batch_decoding() {
    let requests: Vec<DecodeRequest> = [
        fixtures::SPANISH_GREETING,
        "",
        fixtures::ENGLISH_HYPE,
        "привет красивая",
    ]
    .iter()
    .map(|text| DecodeRequest::new(*text))
    .collect();

    let results = decoder().decode_batch(&requests);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().detected_language, "Spanish");
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().detected_language, "English");
    assert_eq!(results[3].as_ref().unwrap().detected_language, "Russian");
}
