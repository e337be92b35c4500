use super::token::AccessToken;
use crate::api::ApiError;
use crate::config::StreamConfig;
use crate::errors::{AppError, AppResult};
use m3u8_rs::MasterPlaylist;
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

/// Label the platform uses for the untranscoded source variant.
pub const SOURCE_LABEL: &str = "chunked";

/// One quality variant of the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendition {
    /// `VIDEO` attribute of the variant, e.g. "720p60"
    pub label: String,
    pub url: String,
}

pub struct ManifestFetcher<'a> {
    http: &'a Client,
    cfg: &'a StreamConfig,
}

impl<'a> ManifestFetcher<'a> {
    pub fn new(http: &'a Client, cfg: &'a StreamConfig) -> Self {
        Self { http, cfg }
    }

    pub fn manifest_url(&self, channel: &str) -> AppResult<Url> {
        let raw = format!(
            "{}/api/channel/hls/{}.m3u8",
            self.cfg.usher_url.trim_end_matches('/'),
            channel
        );
        Url::parse(&raw).map_err(|e| AppError::Stream(format!("manifest url '{raw}': {e}")))
    }

    pub fn fetch(&self, channel: &str, token: &AccessToken) -> AppResult<Vec<Rendition>> {
        let url = self.manifest_url(channel)?;
        debug!(%url, "fetching master playlist");

        let body = self
            .http
            .get(url.clone())
            .query(&[
                ("client_id", self.cfg.client_id.as_str()),
                ("token", token.value.as_str()),
                ("sig", token.signature.as_str()),
                ("allow_source", "true"),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map_err(|e| ApiError::new("GET", e.without_url()))?;

        parse_renditions(&body, &url)
    }
}

/// Variants of a master playlist, in manifest order.
pub fn parse_renditions(body: &[u8], base_url: &Url) -> AppResult<Vec<Rendition>> {
    let playlist = m3u8_rs::parse_master_playlist_res(body)
        .map_err(|e| AppError::Stream(format!("failed to parse HLS master playlist: {e:?}")))?;

    Ok(collect_renditions(playlist, base_url))
}

fn collect_renditions(playlist: MasterPlaylist, base_url: &Url) -> Vec<Rendition> {
    playlist
        .variants
        .into_iter()
        .filter(|v| !v.is_i_frame)
        .filter_map(|v| {
            let label = v
                .video
                .clone()
                .or_else(|| v.resolution.map(|r| format!("{}p", r.height)))?;
            let url = base_url.join(&v.uri).ok()?;
            Some(Rendition {
                label,
                url: url.to_string(),
            })
        })
        .collect()
}

/// Picks the rendition to play by label.
pub struct VariantSelector;

impl VariantSelector {
    /// Exact label match; `best`/`source` map to the source variant (or the
    /// first one listed when the manifest has no source label).
    pub fn select<'r>(renditions: &'r [Rendition], label: &str) -> AppResult<&'r Rendition> {
        let wanted = label.trim();

        let found = match wanted.to_lowercase().as_str() {
            "best" | "source" => renditions
                .iter()
                .find(|r| r.label == SOURCE_LABEL)
                .or_else(|| renditions.first()),
            _ => renditions.iter().find(|r| r.label == wanted),
        };

        found.ok_or_else(|| AppError::RenditionNotFound {
            label: wanted.to_string(),
            available: renditions.iter().map(|r| r.label.clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: &str = r#"#EXTM3U
#EXT-X-TWITCH-INFO:NODE="video-edge-1",CLUSTER="sel01"
#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="chunked",NAME="1080p60 (source)",AUTOSELECT=YES,DEFAULT=YES
#EXT-X-STREAM-INF:BANDWIDTH=8000000,RESOLUTION=1920x1080,CODECS="avc1.64002A,mp4a.40.2",VIDEO="chunked",FRAME-RATE=60.000
https://video-weaver.sel01.hls.ttvnw.net/v1/playlist/source.m3u8
#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="720p60",NAME="720p60",AUTOSELECT=YES,DEFAULT=YES
#EXT-X-STREAM-INF:BANDWIDTH=3422999,RESOLUTION=1280x720,CODECS="avc1.4D401F,mp4a.40.2",VIDEO="720p60",FRAME-RATE=60.000
https://video-weaver.sel01.hls.ttvnw.net/v1/playlist/720p60.m3u8
#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="480p30",NAME="480p",AUTOSELECT=YES,DEFAULT=YES
#EXT-X-STREAM-INF:BANDWIDTH=1427999,RESOLUTION=852x480,CODECS="avc1.4D401F,mp4a.40.2",VIDEO="480p30",FRAME-RATE=30.000
480p30.m3u8
"#;

    fn base() -> Url {
        Url::parse("https://usher.example.net/api/channel/hls/somechan.m3u8").unwrap()
    }

    #[test]
    fn parses_labels_in_manifest_order() {
        let r = parse_renditions(MASTER.as_bytes(), &base()).unwrap();
        let labels: Vec<&str> = r.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["chunked", "720p60", "480p30"]);
    }

    #[test]
    fn relative_uris_are_resolved() {
        let r = parse_renditions(MASTER.as_bytes(), &base()).unwrap();
        assert_eq!(r[2].url, "https://usher.example.net/api/channel/hls/480p30.m3u8");
    }

    #[test]
    fn selects_exact_label() {
        let r = parse_renditions(MASTER.as_bytes(), &base()).unwrap();
        let picked = VariantSelector::select(&r, "720p60").unwrap();
        assert!(picked.url.ends_with("/720p60.m3u8"));
    }

    #[test]
    fn best_means_source() {
        let r = parse_renditions(MASTER.as_bytes(), &base()).unwrap();
        assert_eq!(VariantSelector::select(&r, "best").unwrap().label, SOURCE_LABEL);
    }

    #[test]
    fn missing_label_lists_alternatives() {
        let r = parse_renditions(MASTER.as_bytes(), &base()).unwrap();
        let err = VariantSelector::select(&r, "160p30").unwrap_err();
        match err {
            AppError::RenditionNotFound { label, available } => {
                assert_eq!(label, "160p30");
                assert_eq!(available, ["chunked", "720p60", "480p30"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_is_a_stream_error() {
        let err = parse_renditions(b"<html>nope</html>", &base()).unwrap_err();
        assert!(matches!(err, AppError::Stream(_)));
    }
}
