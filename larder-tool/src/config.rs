use std::path::PathBuf;

use larder_gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use tracing::warn;

/// Environment variables checked for the API key, in order.
const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Effective settings after merging flags, environment and config file.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    /// Empty when no key was found anywhere.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("larder").join("config.toml"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
        Config::default()
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Settings {
    /// Resolves settings. `env` looks up an environment variable.
    pub fn resolve(
        cli_model: Option<String>,
        config: Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| non_empty(env(var)))
            .or_else(|| non_empty(config.api_key))
            .unwrap_or_default();

        let model = non_empty(cli_model)
            .or_else(|| non_empty(config.model))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = non_empty(config.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            model,
            base_url,
        }
    }
}
