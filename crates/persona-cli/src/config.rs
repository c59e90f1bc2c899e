//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use persona_generator::GeneratorConfig;
use persona_reddit::RedditCredentials;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Reddit OAuth client id variable
pub const REDDIT_CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
/// Reddit OAuth client secret variable
pub const REDDIT_CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
/// Reddit user agent variable
pub const REDDIT_USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";
/// OpenAI API key variable
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Fetch, prompt and output settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text and tables
    Text,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default file, or defaults if it is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::path()?)
    }

    /// Load configuration from `path`, or defaults if it is missing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check the generator section.
    pub fn validate(&self) -> Result<()> {
        Ok(self.generator.validate()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            history_size: 1000,
        }
    }
}

/// `~/.persona`, holding the config file and REPL history.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".persona"))
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_history_size() -> usize {
    1000
}

/// Credentials read from the process environment at startup.
///
/// Missing values are kept as `None`; the Reddit credentials are only
/// demanded when a session is opened.
#[derive(Clone, Default)]
pub struct Environment {
    reddit_client_id: Option<String>,
    reddit_client_secret: Option<String>,
    reddit_user_agent: Option<String>,
    openai_api_key: Option<String>,
}

impl Environment {
    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`; empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            reddit_client_id: get(REDDIT_CLIENT_ID_VAR),
            reddit_client_secret: get(REDDIT_CLIENT_SECRET_VAR),
            reddit_user_agent: get(REDDIT_USER_AGENT_VAR),
            openai_api_key: get(OPENAI_API_KEY_VAR),
        }
    }

    /// Reddit credentials, or a configuration error naming the first missing variable.
    pub fn reddit_credentials(&self) -> Result<RedditCredentials> {
        let require = |value: &Option<String>, name: &str| {
            value
                .clone()
                .ok_or_else(|| CliError::Config(format!("Missing environment variable: {}", name)))
        };

        Ok(RedditCredentials::new(
            require(&self.reddit_client_id, REDDIT_CLIENT_ID_VAR)?,
            require(&self.reddit_client_secret, REDDIT_CLIENT_SECRET_VAR)?,
            require(&self.reddit_user_agent, REDDIT_USER_AGENT_VAR)?,
        ))
    }

    /// Whether all three Reddit variables are set.
    pub fn has_reddit_credentials(&self) -> bool {
        self.reddit_credentials().is_ok()
    }

    /// OpenAI API key, if set.
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("reddit_client_id", &self.reddit_client_id)
            .field("reddit_client_secret", &self.reddit_client_secret.as_ref().map(|_| "***"))
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}
