use crate::error::SyncError;
use anyhow::Result;

pub const YOUTUBE_TOKEN_VAR: &str = "YOUTUBE_TOKEN";
pub const SPOTIFY_TOKEN_VAR: &str = "SPOTIFY_TOKEN";

/// Runtime configuration, built once at startup and passed by reference.
/// Tokens are pre-generated credentials; there is no OAuth flow here.
#[derive(Debug, Clone)]
pub struct Config {
    pub youtube_token: String,
    pub spotify_token: String,

    /// Upper bound on URIs per add-tracks request (Spotify caps at 100).
    pub max_batch_size_spotify: usize,
}

fn default_max_batch_spotify() -> usize {
    100
}

impl Config {
    /// Build the config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup. Tests use this
    /// to avoid mutating the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let youtube_token = lookup(YOUTUBE_TOKEN_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SyncError::missing_env(YOUTUBE_TOKEN_VAR))?;
        let spotify_token = lookup(SPOTIFY_TOKEN_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SyncError::missing_env(SPOTIFY_TOKEN_VAR))?;

        Ok(Config {
            youtube_token,
            spotify_token,
            max_batch_size_spotify: default_max_batch_spotify(),
        })
    }
}
