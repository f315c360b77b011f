use std::io::{self, Read};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wassup::core::check_text_length;
use wassup::env::EnvConfig;
use wassup::{
    common_regions, supported_languages, ConfigManager, DecodeError, DecodeRequest, DecodeResult,
    Decoder, DecoderResult,
};

#[derive(Parser, Debug)]
#[command(
    name = "wassup",
    version,
    about = "Explains what a chat message means: language, tone, slang and how to respond"
)]
struct Cli {
    /// Message to decode; "-" or nothing reads standard input
    text: Option<String>,

    /// Skip detection and treat the message as this language
    #[arg(short = 's', long)]
    source_language: Option<String>,

    /// Region to report together with --source-language
    #[arg(short = 'r', long)]
    region: Option<String>,

    #[arg(short = 't', long)]
    target_language: Option<String>,

    /// Decoder configuration file (TOML); defaults to WASSUP_CONFIG
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Print the full result as JSON
    #[arg(short = 'j', long)]
    json: bool,

    /// Only print the detected language and region
    #[arg(short = 'd', long)]
    detect_only: bool,

    /// List supported languages and common regions, then exit
    #[arg(long)]
    list_languages: bool,
}

fn main() {
    let cli = Cli::parse();

    let env_config = match EnvConfig::from_env() {
        Ok(env_config) => env_config,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_config.log_level))
        .with_ansi(!env_config.no_color)
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run(cli, &env_config) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(cli: Cli, env_config: &EnvConfig) -> DecoderResult<()> {
    if cli.list_languages {
        println!("Languages: {}", supported_languages().join(", "));
        println!("Regions: {}", common_regions().join(", "));
        return Ok(());
    }

    let config_path = cli.config.as_deref().or(env_config.config_path.as_deref());
    let manager = match config_path {
        Some(path) => ConfigManager::from_path(path)?,
        None => ConfigManager::load()?,
    };
    let decoder = Decoder::new(manager.into_config())?;

    let text = read_text(cli.text.as_deref())?;
    check_text_length(&text, env_config.max_text_length)?;

    if cli.detect_only {
        if text.trim().is_empty() {
            return Err(DecodeError::InvalidInput(
                "message text is required".to_string(),
            ));
        }
        let (language, region) = decoder.detect_language(&text);
        if cli.json {
            let value = serde_json::json!({ "language": language, "region": region });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{} ({})", language, region);
        }
        return Ok(());
    }

    let mut request = DecodeRequest::new(text);
    request.source_language = cli.source_language;
    request.region = cli.region;
    request.target_language = cli.target_language;

    let result = decoder.decode(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn read_text(arg: Option<&str>) -> DecoderResult<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| DecodeError::InvalidInput(format!("failed to read stdin: {}", e)))?;
            Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn print_result(result: &DecodeResult) {
    let tones = result
        .tone_tags
        .iter()
        .map(|tone| tone.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    println!("Language: {} ({})", result.detected_language, result.region);
    println!("Tones: {}", tones);
    println!();
    println!("{}", result.plain_explanation);

    if let Some(suggestions) = &result.suggested_responses {
        println!();
        println!("Quick replies:");
        for suggestion in suggestions {
            println!("  - {}", suggestion);
        }
    }
}
