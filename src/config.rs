use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FolioError;
use crate::types::list_input;

/// Prefix for environment overrides, e.g. `FOLIO_BASIC__DATABASE_URL`.
pub const ENV_PREFIX: &str = "FOLIO_";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// When set, every `/admin` route requires this key.
    pub admin_key: Option<String>,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite://folio.sqlite".to_string(),
            loglevel: "info".to_string(),
            admin_key: None,
        }
    }
}

/// Transactional email settings (Resend).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub api_key: Option<String>,
    /// Resend API root; a missing trailing slash is added before joining paths.
    pub api_base: Url,
    pub from: String,
    /// Owner inbox; a list or one comma-separated string.
    #[serde(deserialize_with = "list_input::comma_separated")]
    pub to: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: Url::parse("https://api.resend.com/").expect("static resend url"),
            from: "Portfolio Contact <noreply@example.com>".to_string(),
            to: Vec::new(),
            timeout_secs: 15,
        }
    }
}

impl MailConfig {
    /// Both an API key and at least one recipient are set.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()) && !self.to.is_empty()
    }
}

impl Config {
    /// Defaults, overridden by `FOLIO_*` environment variables.
    pub fn load() -> Result<Self, FolioError> {
        Self::figment()
            .extract()
            .map_err(|e| FolioError::Config(Box::new(e)))
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn admin_key(&self) -> Option<&str> {
        self.basic
            .admin_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}
