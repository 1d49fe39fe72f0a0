use super::PlaylistSource;
use crate::error::SyncError;
use crate::models::PlaylistEntry;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::env;

/// YouTube playlist source backed by the YouTube Data API v3.
/// Auth is a pre-generated API token passed as the `key` query parameter.
/// The endpoint may be overridden by the YOUTUBE_API_BASE env var (useful for tests).
pub struct YouTubeSource {
    client: Client,
    token: String,
}

impl YouTubeSource {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    fn api_base() -> String {
        env::var("YOUTUBE_API_BASE")
            .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".into())
    }

    fn name(&self) -> &str {
        "youtube"
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SyncError::Auth {
                service: "youtube",
                status: status.as_u16(),
            }
            .into());
        }
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(anyhow!("youtube request failed: {} => {}", status, txt));
        }
        Ok(resp.json().await?)
    }
}

/// Extract a playlist id from a playlist URL, or pass a bare id through.
/// Accepts `https://www.youtube.com/playlist?list=...` style URLs (any
/// youtube.com host, including music.youtube.com).
pub fn playlist_id_from_url(s: &str) -> Result<String> {
    if !s.contains("://") {
        return Ok(s.to_string());
    }
    let url = url::Url::parse(s).map_err(|e| anyhow!("invalid playlist URL {:?}: {}", s, e))?;
    let host = url.host_str().unwrap_or("");
    if !(host == "youtube.com" || host.ends_with(".youtube.com") || host == "youtu.be") {
        return Err(anyhow!("not a YouTube URL: {:?}", s));
    }
    url.query_pairs()
        .find(|(k, _)| k == "list")
        .map(|(_, v)| v.into_owned())
        .ok_or_else(|| anyhow!("playlist URL has no 'list' parameter: {:?}", s))
}

#[async_trait]
impl PlaylistSource for YouTubeSource {
    fn name(&self) -> &str {
        YouTubeSource::name(self)
    }

    async fn playlist_title(&self, playlist_id: &str) -> Result<String> {
        let url = format!(
            "{}/playlists?part=snippet&id={}&key={}",
            Self::api_base(),
            urlencoding::encode(playlist_id),
            urlencoding::encode(&self.token)
        );
        let j = self.get_json(&url).await?;
        let title = j["items"]
            .as_array()
            .and_then(|a| a.first())
            .and_then(|it| it["snippet"]["title"].as_str())
            .map(|s| s.to_string());
        title.ok_or_else(|| SyncError::NotFound(playlist_id.to_string()).into())
    }

    async fn playlist_entries(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        let base_url = format!(
            "{}/playlistItems?part=snippet&maxResults=50&playlistId={}&key={}",
            Self::api_base(),
            urlencoding::encode(playlist_id),
            urlencoding::encode(&self.token)
        );

        let mut entries = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let url = match &page_token {
                Some(t) => format!("{}&pageToken={}", base_url, urlencoding::encode(t)),
                None => base_url.clone(),
            };
            let j = self.get_json(&url).await?;
            if let Some(items) = j["items"].as_array() {
                for it in items {
                    let snippet = &it["snippet"];
                    let title = match snippet["title"].as_str() {
                        Some(t) => t.to_string(),
                        None => continue,
                    };
                    let video_id = snippet["resourceId"]["videoId"]
                        .as_str()
                        .unwrap_or("")
                        .to_string();
                    let position = snippet["position"].as_u64().unwrap_or(entries.len() as u64);
                    entries.push(PlaylistEntry {
                        video_id,
                        title,
                        position,
                    });
                }
            }
            page_token = j["nextPageToken"].as_str().map(|s| s.to_string());
            if page_token.is_none() {
                break;
            }
            debug!("following nextPageToken for playlist {}", playlist_id);
        }

        // playlistItems come back page-ordered already; positions are the
        // authoritative ordering within the playlist.
        entries.sort_by_key(|e| e.position);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_passes_through() {
        let id = playlist_id_from_url("PLabc123").unwrap();
        assert_eq!(id, "PLabc123");
    }

    #[test]
    fn playlist_url_yields_list_param() {
        let id =
            playlist_id_from_url("https://www.youtube.com/playlist?list=PLxyz&foo=1").unwrap();
        assert_eq!(id, "PLxyz");
    }

    #[test]
    fn music_host_is_accepted() {
        let id = playlist_id_from_url("https://music.youtube.com/playlist?list=PLmus").unwrap();
        assert_eq!(id, "PLmus");
    }

    #[test]
    fn url_without_list_param_is_rejected() {
        assert!(playlist_id_from_url("https://www.youtube.com/watch?v=abc").is_err());
    }

    #[test]
    fn non_youtube_url_is_rejected() {
        assert!(playlist_id_from_url("https://example.com/playlist?list=PL1").is_err());
    }
}
