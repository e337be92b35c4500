//! Optional `stream` section: everything the live stream opener needs.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public web client id used by the platform's own player.
pub const DEFAULT_CLIENT_ID: &str = "kimne78kx3ncx6brgo4mv6wki5h1ko";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub default_channel: String,
    /// Rendition label, e.g. "720p60"
    pub quality: String,
    pub client_id: String,
    pub gql_url: String,
    pub usher_url: String,
    /// Seconds
    pub timeout: f64,
    pub player: PlayerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerConfig {
    /// Drive a macOS application through AppleScript
    Osascript { app: String },
    /// Run `program [args..] <url>`
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::Osascript {
            app: "Movist Pro".to_string(),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            default_channel: "zilioner".to_string(),
            quality: "720p60".to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            gql_url: "https://gql.twitch.tv/gql".to_string(),
            usher_url: "https://usher.ttvnw.net".to_string(),
            timeout: 30.0,
            player: PlayerConfig::default(),
        }
    }
}

impl StreamConfig {
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [("stream.gql_url", &self.gql_url), ("stream.usher_url", &self.usher_url)] {
            url::Url::parse(value)
                .map_err(|e| AppError::Config(format!("{} '{}': {}", name, value, e)))?;
        }

        self.timeout()?;

        if let PlayerConfig::Command { program, .. } = &self.player
            && program.trim().is_empty()
        {
            return Err(AppError::Config("stream.player.program is empty".into()));
        }

        Ok(())
    }

    pub fn timeout(&self) -> AppResult<Duration> {
        super::seconds("stream.timeout", self.timeout)
    }
}
