pub mod youtube;
pub mod spotify;
pub mod mock;

use crate::models::{CandidateTrack, PlaylistEntry};
use anyhow::Result;

/// Read-only playlist source: the YouTube side of the sync.
/// Implementations: youtube::YouTubeSource, mock::MockSource.
#[async_trait::async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Human-readable title of the playlist, for logging.
    async fn playlist_title(&self, playlist_id: &str) -> Result<String>;

    /// All entries of the playlist, in playlist order.
    async fn playlist_entries(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>>;

    /// Return the source's name (for logging)
    fn name(&self) -> &str;
}

/// Music catalog capability: ranked track search plus playlist append.
/// Implementations: spotify::SpotifyCatalog, mock::MockCatalog.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Search tracks by free-text query. Results keep the remote ranking.
    async fn search_tracks(&self, query: &str) -> Result<Vec<CandidateTrack>>;

    /// Append tracks (URIs) to a playlist (batching done by caller)
    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()>;

    /// Return the catalog's name (for logging)
    fn name(&self) -> &str;
}
