use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";

pub const DEFAULT_HF_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_TOKEN_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Language the subtask prompt is written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    Es,
    En,
}

impl FromStr for PromptLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "spanish" => Ok(PromptLanguage::Es),
            "en" | "english" => Ok(PromptLanguage::En),
            other => Err(format!("unsupported prompt language '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hf_model: Option<String>,
    pub hf_token: Option<String>,
    pub hf_base_url: String,
    pub inference_timeout_secs: u64,
    pub prompt_language: PromptLanguage,
    pub token_service_url: String,
    pub host: String,
    pub port: u16,
}

/// Model identifier and access token, both known to be set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceCredentials {
    pub model: String,
    pub access_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hf_model: None,
            hf_token: None,
            hf_base_url: DEFAULT_HF_BASE_URL.to_string(),
            inference_timeout_secs: DEFAULT_INFERENCE_TIMEOUT_SECS,
            prompt_language: PromptLanguage::default(),
            token_service_url: DEFAULT_TOKEN_SERVICE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory (if any), then apply
    /// environment overrides.
    pub fn new() -> Self {
        let mut config = Self::from_file(Path::new(CONFIG_FILE_PATH));
        config.apply_env_overrides_with(|key| std::env::var(key).ok());
        config
    }

    /// Read a TOML config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn from_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("Failed to parse {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Failed to read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn apply_env_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("HF_MODEL") {
            self.hf_model = Some(model);
        }
        if let Some(token) = lookup("HF_TOKEN") {
            self.hf_token = Some(token);
        }
        if let Some(base_url) = lookup("HF_BASE_URL") {
            self.hf_base_url = base_url;
        }
        if let Some(timeout) = lookup("INFERENCE_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.inference_timeout_secs = secs,
                _ => log::warn!("Ignoring invalid INFERENCE_TIMEOUT_SECS '{}'", timeout),
            }
        }
        if let Some(language) = lookup("PROMPT_LANGUAGE") {
            match language.parse() {
                Ok(language) => self.prompt_language = language,
                Err(err) => log::warn!("Ignoring PROMPT_LANGUAGE: {}", err),
            }
        }
        if let Some(url) = lookup("TOKEN_SERVICE_URL") {
            self.token_service_url = url;
        }
        if let Some(host) = lookup("APP_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => log::warn!("Ignoring invalid APP_PORT '{}'", port),
            }
        }
    }

    /// Both the model identifier and the access token, or `None` if either
    /// is unset or empty.
    pub fn credentials(&self) -> Option<InferenceCredentials> {
        let model = self.hf_model.as_deref().filter(|m| !m.trim().is_empty())?;
        let access_token = self.hf_token.as_deref().filter(|t| !t.trim().is_empty())?;
        Some(InferenceCredentials {
            model: model.to_string(),
            access_token: access_token.to_string(),
        })
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference_timeout_secs)
    }
}
