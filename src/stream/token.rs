use crate::api::ApiError;
use crate::config::StreamConfig;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const OPERATION_NAME: &str = "PlaybackAccessToken_Template";

const PLAYBACK_ACCESS_TOKEN_QUERY: &str = "query PlaybackAccessToken_Template($login: String!, $isLive: Boolean!, $vodID: ID!, $isVod: Boolean!, $playerType: String!) {  streamPlaybackAccessToken(channelName: $login, params: {platform: \"web\", playerBackend: \"mediaplayer\", playerType: $playerType}) @include(if: $isLive) {    value    signature    __typename  }  videoPlaybackAccessToken(id: $vodID, params: {platform: \"web\", playerBackend: \"mediaplayer\", playerType: $playerType}) @include(if: $isVod) {    value    signature    __typename  }}";

/// Signed playback token for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub value: String,
    pub signature: String,
}

#[derive(Debug, Deserialize)]
struct GqlResponse {
    #[serde(default)]
    data: Option<GqlData>,
    #[serde(default)]
    errors: Vec<GqlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GqlData {
    #[serde(default)]
    stream_playback_access_token: Option<AccessToken>,
}

#[derive(Debug, Deserialize)]
struct GqlError {
    message: String,
}

pub struct TokenFetcher<'a> {
    http: &'a Client,
    cfg: &'a StreamConfig,
}

impl<'a> TokenFetcher<'a> {
    pub fn new(http: &'a Client, cfg: &'a StreamConfig) -> Self {
        Self { http, cfg }
    }

    pub fn fetch(&self, channel: &str) -> AppResult<AccessToken> {
        let body = json!({
            "operationName": OPERATION_NAME,
            "query": PLAYBACK_ACCESS_TOKEN_QUERY,
            "variables": {
                "isLive": true,
                "login": channel,
                "isVod": false,
                "vodID": "",
                "playerType": "site",
            },
        });

        debug!(channel, url = %self.cfg.gql_url, "requesting playback access token");
        let response: GqlResponse = self
            .http
            .post(&self.cfg.gql_url)
            .header("Client-ID", &self.cfg.client_id)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<GqlResponse>())
            .map_err(|e| ApiError::new("POST", e.without_url()))?;

        if let Some(err) = response.errors.first() {
            return Err(AppError::Stream(format!("token request rejected: {}", err.message)));
        }

        response
            .data
            .and_then(|d| d.stream_playback_access_token)
            .ok_or_else(|| {
                AppError::Stream(format!("channel '{channel}' is offline or does not exist"))
            })
    }
}
