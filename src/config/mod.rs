use crate::api::request::Operation;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub mod stream;

pub use stream::{PlayerConfig, StreamConfig};

/// File name looked up in the working directory and in the config dir.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiSection,
    pub auth: AuthSection,
    pub default_user: DefaultUser,
    pub endpoints: Endpoints,
    #[serde(default)]
    pub stream: StreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSection {
    /// Sent as the `key` query/body parameter when non-empty
    pub api_key: String,
    /// Sent as the `Authorization` header when non-empty
    pub api_secret: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUser {
    pub email: String,
}

/// Logical operation → endpoint path (or template) table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub worktime_get: String,
    pub worktime_post: String,
    pub worktime_update: String,
    /// Template with an `{email}` placeholder
    pub worktime_delete: String,
}

/// A positive, representable number of seconds.
pub(crate) fn seconds(name: &str, secs: f64) -> AppResult<Duration> {
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|d| !d.is_zero())
        .ok_or_else(|| {
            AppError::Config(format!(
                "{name} must be a positive number of seconds, got {secs}"
            ))
        })
}

fn default_user_agent() -> String {
    format!("wsflow/{}", env!("CARGO_PKG_VERSION"))
}

impl Endpoints {
    pub fn path(&self, op: Operation) -> &str {
        match op {
            Operation::FetchWorktime => &self.worktime_get,
            Operation::SubmitAttendanceEvent => &self.worktime_post,
            Operation::UpdateWorktime => &self.worktime_update,
            Operation::DeleteWorktime => &self.worktime_delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wsflow")
    }

    /// Return the full path of the config file in the config directory
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Pick the config file: explicit path (flag or env) first, then
    /// `./config.json` (launchers run scripts inside the workflow dir),
    /// then the platform config dir.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return local;
        }

        Self::config_file()
    }

    /// Read, parse and validate the configuration document.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        Self::parse(&content, ConfigFormat::from_path(path)).map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn parse(content: &str, format: ConfigFormat) -> AppResult<Self> {
        let cfg: Config = match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| AppError::Config(e.to_string()))?
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?
            }
        };

        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that go beyond key presence.
    pub fn validate(&self) -> AppResult<()> {
        let base = url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::Config(format!("api.base_url '{}': {}", self.api.base_url, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "api.base_url must be http(s), got '{}'",
                base.scheme()
            )));
        }

        self.timeout()?;

        if self.default_user.email.trim().is_empty() {
            return Err(AppError::Config("default_user.email is empty".into()));
        }

        self.stream.validate()
    }

    pub fn timeout(&self) -> AppResult<Duration> {
        seconds("api.timeout", self.api.timeout)
    }

    /// Copy with credentials hidden, for printing.
    pub fn masked(&self) -> Self {
        let mut cfg = self.clone();
        cfg.auth.api_key = mask(&cfg.auth.api_key);
        cfg.auth.api_secret = mask(&cfg.auth.api_secret);
        cfg
    }

    /// Serialize back in the same format the file uses.
    pub fn render(&self, format: ConfigFormat) -> AppResult<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "*".repeat(secret.chars().count())
    } else {
        format!("{}****", visible)
    }
}
