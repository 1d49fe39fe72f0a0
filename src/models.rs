use serde::{Deserialize, Serialize};

/// One video as listed in the source YouTube playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub video_id: String,
    pub title: String,
    pub position: u64,
}

/// One track returned by a Spotify search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateTrack {
    pub uri: String,
    pub title: String,
    pub artists: Vec<String>,
}

/// Outcome of matching one playlist entry against the catalog.
#[derive(Debug, Clone)]
pub enum MatchResult {
    Matched(CandidateTrack),
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }
}
