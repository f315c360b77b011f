//! Typed environment variables
//!
//! Every variable the binaries read is declared here once, with its default, a description
//! and a validating parser.

use std::env;
use std::fmt;

/// Environment variable parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// Accessor for one environment variable
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

pub mod core {
    use super::*;

    /// Log filter for the binaries
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "WASSUP_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            Ok(!value.is_empty())
        }
    }

    /// Explicit decoder configuration file
    pub struct ConfigPath;
    impl EnvVar<String> for ConfigPath {
        const NAME: &'static str = "WASSUP_CONFIG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Path to a decoder configuration file (TOML)";

        fn parse(value: &str) -> EnvResult<String> {
            let path = value.trim();
            if path.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Path cannot be empty".to_string(),
                });
            }
            Ok(shellexpand::tilde(path).to_string())
        }
    }
}

pub mod decoder {
    use super::*;

    /// Longest message accepted at the CLI and HTTP boundary, in characters
    pub struct MaxTextLength;
    impl EnvVar<usize> for MaxTextLength {
        const NAME: &'static str = "WASSUP_MAX_TEXT_LENGTH";
        const DEFAULT: Option<usize> = Some(5000);
        const DESCRIPTION: &'static str = "Maximum message length in characters";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_positive_usize(value, Self::NAME, 1, 100_000)
        }
    }
}

pub mod web {
    use super::*;

    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "WASSUP_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Web server bind address";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "WASSUP_PORT";
        const DEFAULT: Option<u16> = Some(7080);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid port number (1-65535)".to_string(),
            })?;

            if port == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                });
            }

            Ok(port)
        }
    }
}

fn parse_positive_usize(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid positive number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

/// Variables shared by both binaries
///
/// Bind address and port are web-only and are read by `WebConfig`.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,
    pub no_color: bool,
    pub config_path: Option<String>,
    pub max_text_length: usize,
}

impl EnvConfig {
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            no_color: core::NoColor::get()?,
            config_path: core::ConfigPath::get().ok(),
            max_text_length: decoder::MaxTextLength::get()?,
        })
    }
}

/// Markdown listing of every variable
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");

    docs.push_str("## Core\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: \"info\")\n",
        core::LogLevel::NAME,
        core::LogLevel::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        core::NoColor::NAME,
        core::NoColor::DESCRIPTION,
        core::NoColor::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {}\n",
        core::ConfigPath::NAME,
        core::ConfigPath::DESCRIPTION
    ));

    docs.push_str("\n## Decoder\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        decoder::MaxTextLength::NAME,
        decoder::MaxTextLength::DESCRIPTION,
        decoder::MaxTextLength::DEFAULT
    ));

    docs.push_str("\n## Web Server\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: \"127.0.0.1\")\n",
        web::BindAddress::NAME,
        web::BindAddress::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        web::Port::NAME,
        web::Port::DESCRIPTION,
        web::Port::DEFAULT
    ));

    docs
}
