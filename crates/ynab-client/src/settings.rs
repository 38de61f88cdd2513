//! Layered configuration: built-in defaults, an optional TOML file, then
//! `YNAB_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::normalize::CurrencyFormat;
use crate::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "https://api.ynab.com/v1";
pub const DEFAULT_BUDGET_ID: &str = "last-used";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LIMIT: usize = 20;
const ENV_PREFIX: &str = "YNAB";
const CONFIG_PATH_ENV_VAR: &str = "YNAB_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_token: Option<String>,
    pub api_url: String,
    pub budget_id: String,
    pub timeout_secs: u64,
    pub default_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            budget_id: DEFAULT_BUDGET_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

/// Everything a command needs besides the API itself. Built once per process
/// (or per shell session) and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub budget_id: String,
    pub default_limit: usize,
    pub currency: CurrencyFormat,
}

impl Session {
    pub fn new(budget_id: &str) -> Self {
        Self {
            budget_id: budget_id.to_string(),
            default_limit: DEFAULT_LIMIT,
            currency: CurrencyFormat::default(),
        }
    }
}

impl Settings {
    /// Reads the config file (explicit path, `YNAB_CONFIG`, or
    /// `~/.config/ynab/config.toml`) and the process environment.
    pub fn load(config_path: Option<&Path>) -> ClientResult<Self> {
        let path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };
        Self::load_from(path.as_deref(), None)
    }

    /// Same as [`Settings::load`] with an explicit environment map instead of
    /// the process environment when `env` is `Some`.
    pub fn load_from(
        config_path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> ClientResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|error| ClientError::configuration(&error.to_string()))?;

        if settings.default_limit == 0 {
            return Err(ClientError::configuration(
                "default_limit must be at least 1.",
            ));
        }

        tracing::debug!(
            api_url = %settings.api_url,
            budget_id = %settings.budget_id,
            token_present = settings.api_token.is_some(),
            "settings loaded"
        );
        Ok(settings)
    }

    /// The bearer token, or a configuration error explaining how to set one.
    pub fn api_token(&self) -> ClientResult<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(ClientError::missing_token)
    }

    pub fn session(&self, budget_override: Option<&str>) -> Session {
        let budget_id = budget_override
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.budget_id);
        Session {
            budget_id: budget_id.to_string(),
            default_limit: self.default_limit,
            currency: CurrencyFormat::default(),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    home::home_dir().map(|home| home.join(".config").join("ynab").join("config.toml"))
}
