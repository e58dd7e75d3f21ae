//! Layered application configuration.
//!
//! Priority, lowest first: built-in defaults, config file, `MVP_`-prefixed
//! environment variables (`MVP_SERVER__PORT=8000`), CLI flags (which also read
//! their own plain env vars such as `PORT`).

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::session::DEFAULT_SESSION_TIMEOUT;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub log: LogConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Brand title in the header and `<title>`.
    pub title: String,
}

impl ServerConfig {
    /// `host:port` for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("session.idle_timeout_secs", DEFAULT_SESSION_TIMEOUT.as_secs())?
            .set_default("session.sweep_interval_secs", 60)?
            .set_default("log.format", LogFormat::default().as_str())?
            .set_default("ui.title", "MVP Shell")?;

        match &cli.config {
            Some(path) => builder = builder.add_source(File::from(path.as_path())),
            None => {
                builder = builder
                    .add_source(File::from(Path::new(CWD_CONFIG_FILE)).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("MVP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(format) = cli.log_format {
            builder = builder.set_override("log.format", format.as_str())?;
        }

        builder.build()?.try_deserialize()
    }
}
