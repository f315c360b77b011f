//! Configuration integration tests

use std::path::PathBuf;

use wassup::config::constants;
use wassup::{ConfigManager, DecodeRequest, DecoderConfig, ToneLabel};

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{block, decoder_with};

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wassup-{}-{}.toml", name, std::process::id()));
    std::fs::write(&path, content).expect("temp dir must be writable");
    path
}

#[test]
fn test_search_paths() {
    assert_eq!(constants::CONFIG_PATHS[0], "wassup.toml");
    assert!(constants::CONFIG_PATHS
        .iter()
        .any(|path| path.starts_with("~/")));
}

#[test]
fn test_file_then_environment_layering() {
    let path = write_config(
        "layering",
        r#"
max_tones = 2
suggest_responses = false

[[extra_tone_rules]]
keywords = ["wyd"]
tone = "question"
weight = 5
"#,
    );
    let path_str = path.to_str().unwrap();

    let manager = ConfigManager::from_path(path_str).unwrap();
    let config = manager.config();
    assert_eq!(manager.config_path(), Some(path_str));
    assert_eq!(config.max_tones, 2);
    assert_eq!(config.max_explained_terms, 3);
    assert!(!config.suggest_responses);
    assert_eq!(config.extra_tone_rules.len(), 1);

    std::env::set_var("WASSUP_DECODER_MAX_EXPLAINED_TERMS", "1");
    let overridden = ConfigManager::from_path(path_str).map(ConfigManager::into_config);
    std::env::remove_var("WASSUP_DECODER_MAX_EXPLAINED_TERMS");

    let overridden = overridden.unwrap();
    assert_eq!(overridden.max_explained_terms, 1);
    assert_eq!(overridden.max_tones, 2);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_invalid_file_is_rejected() {
    let path = write_config("invalid", "max_tones = 0\n");
    let result = ConfigManager::from_path(path.to_str().unwrap());
    let _ = std::fs::remove_file(&path);

    assert!(result.is_err());
}

#[test]
fn test_extra_rules_change_ranking() {
    let config = DecoderConfig::from_toml_str(
        r#"
        [[extra_tone_rules]]
        keywords = ["wyd"]
        tone = "question"
        weight = 5
        "#,
    )
    .unwrap();
    let decoder = decoder_with(config);

    let result = decoder.decode(&DecodeRequest::new("hey wyd")).unwrap();
    assert_eq!(result.tone_tags, vec![ToneLabel::Question, ToneLabel::Friendly]);
}

#[test]
fn test_truncation_limits_are_configurable() {
    let config = DecoderConfig {
        max_tones: 1,
        max_explained_terms: 1,
        ..Default::default()
    };
    let decoder = decoder_with(config);
    let result = decoder
        .decode(&DecodeRequest::new("omg lol ngl that's fire"))
        .unwrap();

    assert_eq!(result.tone_tags.len(), 1);
    assert_eq!(result.slang_items.len(), 3);
    assert_eq!(
        block(&result.plain_explanation, "Key terms used"),
        Some("\"lol\" means \"Laughing out loud\" (Amusement).")
    );
}

#[test]
fn test_example_config_round_trips() {
    let path = std::env::temp_dir().join(format!("wassup-example-{}.toml", std::process::id()));
    let path_str = path.to_str().unwrap();

    ConfigManager::generate_example_config(path_str).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(
        DecoderConfig::from_toml_str(&content).unwrap(),
        DecoderConfig::default()
    );
}
