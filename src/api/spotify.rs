use super::Catalog;
use crate::error::SyncError;
use crate::models::CandidateTrack;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::json;
use std::env;

const SEARCH_LIMIT: usize = 5;

/// Spotify catalog backed by the Spotify Web API.
/// Auth is a pre-generated bearer token; there is no refresh flow here.
/// The endpoint may be overridden by the SPOTIFY_API_BASE env var (useful for tests).
pub struct SpotifyCatalog {
    client: Client,
    token: String,
}

impl SpotifyCatalog {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    fn api_base() -> String {
        env::var("SPOTIFY_API_BASE").unwrap_or_else(|_| "https://api.spotify.com/v1".into())
    }

    fn name(&self) -> &str {
        "spotify"
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Extract a playlist id from an open.spotify.com URL, a spotify:playlist:
/// URI, or pass a bare id through.
pub fn playlist_id_from_arg(s: &str) -> Result<String> {
    if let Some(rest) = s.strip_prefix("spotify:playlist:") {
        if rest.is_empty() {
            return Err(anyhow!("empty playlist id in URI {:?}", s));
        }
        return Ok(rest.to_string());
    }
    if s.contains("://") {
        let url = url::Url::parse(s).map_err(|e| anyhow!("invalid playlist URL {:?}: {}", s, e))?;
        let host = url.host_str().unwrap_or("");
        if !(host == "open.spotify.com" || host == "spotify.com") {
            return Err(anyhow!("not a Spotify playlist URL: {:?}", s));
        }
        let mut segments = url.path_segments().ok_or_else(|| anyhow!("bad URL: {:?}", s))?;
        if segments.next() != Some("playlist") {
            return Err(anyhow!("not a Spotify playlist URL: {:?}", s));
        }
        return segments
            .next()
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string())
            .ok_or_else(|| anyhow!("playlist URL has no id segment: {:?}", s));
    }
    Ok(s.to_string())
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    fn name(&self) -> &str {
        SpotifyCatalog::name(self)
    }

    async fn search_tracks(&self, query: &str) -> Result<Vec<CandidateTrack>> {
        let url = format!(
            "{}/search?q={}&type=track&limit={}",
            Self::api_base(),
            urlencoding::encode(query),
            SEARCH_LIMIT
        );
        let resp = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.bearer())
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SyncError::Auth {
                service: "spotify",
                status: status.as_u16(),
            }
            .into());
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(anyhow!("rate_limited: retry_after={:?}", retry_after));
        }
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(anyhow!("search failed: {} => {}", status, txt));
        }

        let j: serde_json::Value = resp.json().await?;
        let mut candidates = Vec::new();
        if let Some(items) = j["tracks"]["items"].as_array() {
            for it in items {
                let uri = match it["uri"].as_str() {
                    Some(u) => u.to_string(),
                    None => continue,
                };
                let title = it["name"].as_str().unwrap_or("").to_string();
                let artists = it["artists"]
                    .as_array()
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|a| a["name"].as_str())
                            .map(|s| s.to_string())
                            .collect()
                    })
                    .unwrap_or_default();
                candidates.push(CandidateTrack { uri, title, artists });
            }
        }
        Ok(candidates)
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let url = format!("{}/playlists/{}/tracks", Self::api_base(), playlist_id);
        let body = json!({ "uris": uris });
        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.bearer())
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SyncError::Auth {
                service: "spotify",
                status: status.as_u16(),
            }
            .into());
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SyncError::NotFound(playlist_id.to_string()).into());
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(anyhow!("rate_limited: retry_after={:?}", retry_after));
        }
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(anyhow!("add tracks failed: {} => {}", status, txt));
        }
        Ok(())
    }
}
