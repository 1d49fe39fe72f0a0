use thiserror::Error;

/// Error kinds the CLI distinguishes when picking an exit code.
/// Everything else travels as a plain `anyhow::Error` and aborts the run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Missing or unusable startup configuration (e.g. an absent token
    /// environment variable). Raised before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// A pre-generated token was rejected by the remote service.
    #[error("{service} rejected the supplied token (HTTP {status})")]
    Auth { service: &'static str, status: u16 },

    /// A playlist id or URL did not resolve on the remote service.
    #[error("playlist not found: {0}")]
    NotFound(String),
}

impl SyncError {
    pub fn missing_env(name: &str) -> Self {
        SyncError::Config(format!("missing environment variable {:?}", name))
    }
}
