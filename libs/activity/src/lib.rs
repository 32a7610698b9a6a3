use std::{io::Write, path::Path};

use tracing::info;

pub mod client;
pub mod events;
mod response;
pub mod util;

pub use client::Client;
pub use response::IntoResponse;

static DEFAULT_BASE_URL: &str = "https://api.github.com";
static DEFAULT_USER_AGENT: &str = "github-activity";

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Error de conexión o lectura de datos: {}: {}", message, source)]
    Connection {
        message: String,
        source: reqwest::Error,
    },

    #[error("Error: El usuario '{}' no fue encontrado.", username)]
    UserNotFound { username: String },

    #[error("Error en la API de GitHub. Código de estado: {}", status_code)]
    Api { status_code: u16 },

    #[error("Error al procesar la actividad: {}: {}", message, source)]
    Parse {
        message: String,
        source: serde_json::Error,
    },

    #[error("io: {}: {}", message, source)]
    StdIoError {
        message: String,
        source: std::io::Error,
    },

    #[error("toml: {}: {}", message, source)]
    TomlDeError {
        message: String,
        source: toml::de::Error,
    },

    #[error("config: {}", message)]
    Config { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Reads a TOML file and overlays its `[github]` table on the defaults.
    pub fn load(path: &Path) -> Result<Self, ActivityError> {
        let config = util::load_config(path)?;

        init_config(&config)
    }
}

pub fn init_config(
    config: &toml::map::Map<String, toml::Value>,
) -> Result<Config, ActivityError> {
    let mut result = Config::default();

    let Some(github) = config.get("github") else {
        return Ok(result);
    };

    if let Some(base_url) = github.get("base_url") {
        result.base_url = base_url
            .as_str()
            .into_response("failed to parse base_url config")?
            .trim_end_matches('/')
            .to_string();
    }

    if let Some(user_agent) = github.get("user_agent") {
        result.user_agent = user_agent
            .as_str()
            .into_response("failed to parse user_agent config")?
            .to_string();
    }

    Ok(result)
}

/// Fetches `username`'s public events and writes the report to `out`.
pub async fn run<W: Write>(
    username: &str,
    config: &Config,
    out: &mut W,
) -> Result<(), ActivityError> {
    info!(task = "show activity", username);

    let client = Client::new(config)?;
    let text = client.fetch_events(username).await?;

    events::display(&text, out)
}
