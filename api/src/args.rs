use std::time::Duration;

use clap::{Parser, ValueEnum};
use dinstein_core::domain::common::{DinsteinConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "dinstein-api", version, about = "Dinstein restaurant recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4-turbo")]
    pub openai_model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub openai_base_url: String,

    #[arg(long = "openai-timeout-ms", env = "OPENAI_TIMEOUT_MS", default_value_t = 25_000)]
    pub openai_timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,

    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
}

impl From<Args> for DinsteinConfig {
    fn from(args: Args) -> Self {
        DinsteinConfig {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
                openai_base_url: args.llm.openai_base_url,
                timeout: Duration::from_millis(args.llm.openai_timeout_ms),
                ..LLMConfig::default()
            },
        }
    }
}
