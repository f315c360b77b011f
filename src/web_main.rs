//! Web server entry point

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use wassup::env::EnvConfig;
use wassup::web::{WebConfig, WebServer};
use wassup::{ConfigManager, Decoder};

#[derive(Parser, Debug)]
#[command(name = "wassup-web", version, about = "Wassup Web Server")]
struct WebArgs {
    /// Bind address [env: WASSUP_BIND_ADDRESS] [default: 127.0.0.1]
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Port [env: WASSUP_PORT] [default: 7080]
    #[arg(short = 'p', long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = WebArgs::command().after_help(endpoint_help()).get_matches();
    let args = WebArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let env_config = EnvConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_config.log_level))
        .with_ansi(!env_config.no_color)
        .init();

    let mut web_config = WebConfig::from_env()?;
    if let Some(bind) = args.bind {
        web_config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        web_config.port = port;
    }

    let manager = match env_config.config_path.as_deref() {
        Some(path) => ConfigManager::from_path(path)?,
        None => ConfigManager::load()?,
    };
    let decoder = Decoder::new(manager.into_config())?;

    WebServer::new(web_config, decoder).start().await?;

    Ok(())
}

fn endpoint_help() -> String {
    let mut help = String::from(
        "ENDPOINTS:
    GET  /health           Health check
    POST /api/decode       Decode a message
    POST /api/detect       Detect the language of a message
    GET  /api/languages    Supported source languages
    GET  /api/regions      Common regions

",
    );
    help.push_str(&wassup::env::generate_env_docs());
    help
}
