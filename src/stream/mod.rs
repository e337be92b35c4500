//! Live stream opener: token → master playlist → rendition → player.

pub mod manifest;
pub mod player;
pub mod token;

use crate::config::StreamConfig;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use reqwest::blocking::Client;
use std::sync::LazyLock;

pub use manifest::{ManifestFetcher, Rendition, VariantSelector};
pub use player::PlayerLauncher;
pub use token::{AccessToken, TokenFetcher};

pub static CHANNEL_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.|m\.)?twitch\.tv/([A-Za-z0-9_]+)").expect("channel url regex")
});

/// Channel login from a bare name or a channel URL; blank input means the
/// configured default.
pub fn channel_from_input(input: Option<&str>, default: &str) -> String {
    let raw = input.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(default);

    let name = CHANNEL_URL_REGEX
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw);

    name.to_lowercase()
}

/// Token and manifest lookups for one configuration.
pub struct StreamResolver {
    http: Client,
    cfg: StreamConfig,
}

impl StreamResolver {
    pub fn new(cfg: StreamConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(cfg.timeout()?)
            .build()
            .map_err(|e| AppError::Other(format!("HTTP client setup failed: {e}")))?;
        Ok(Self { http, cfg })
    }

    pub fn config(&self) -> &StreamConfig {
        &self.cfg
    }

    pub fn renditions(&self, channel: &str) -> AppResult<Vec<Rendition>> {
        let token = TokenFetcher::new(&self.http, &self.cfg).fetch(channel)?;
        let renditions = ManifestFetcher::new(&self.http, &self.cfg).fetch(channel, &token)?;

        if renditions.is_empty() {
            return Err(AppError::Stream(format!("no renditions listed for '{channel}'")));
        }
        Ok(renditions)
    }
}
