use super::{Catalog, PlaylistSource};
use crate::models::{CandidateTrack, PlaylistEntry};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::info;

/// In-memory playlist source used in tests. Returns a fixed list of entries.
pub struct MockSource {
    pub title: String,
    pub entries: Vec<PlaylistEntry>,
}

impl MockSource {
    pub fn new(title: impl Into<String>, titles: &[&str]) -> Self {
        let entries = titles
            .iter()
            .enumerate()
            .map(|(i, t)| PlaylistEntry {
                video_id: format!("vid{}", i),
                title: t.to_string(),
                position: i as u64,
            })
            .collect();
        Self {
            title: title.into(),
            entries,
        }
    }
}

#[async_trait]
impl PlaylistSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn playlist_title(&self, playlist_id: &str) -> Result<String> {
        info!("MockSource: playlist_title {}", playlist_id);
        Ok(self.title.clone())
    }

    async fn playlist_entries(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        info!("MockSource: playlist_entries {}", playlist_id);
        Ok(self.entries.clone())
    }
}

/// In-memory catalog used in tests. Search answers come from a query map;
/// added URIs are recorded per playlist so tests can assert on them.
#[derive(Default)]
pub struct MockCatalog {
    results: HashMap<String, Vec<CandidateTrack>>,
    pub added: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a query to a single candidate with the given URI.
    pub fn with_result(mut self, query: &str, uri: &str) -> Self {
        self.results.insert(
            query.to_string(),
            vec![CandidateTrack {
                uri: uri.to_string(),
                title: query.to_string(),
                artists: vec![],
            }],
        );
        self
    }

    pub fn with_candidates(mut self, query: &str, candidates: Vec<CandidateTrack>) -> Self {
        self.results.insert(query.to_string(), candidates);
        self
    }

    pub fn added_uris(&self) -> Vec<String> {
        self.added
            .lock()
            .unwrap()
            .iter()
            .flat_map(|(_, uris)| uris.clone())
            .collect()
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search_tracks(&self, query: &str) -> Result<Vec<CandidateTrack>> {
        info!("MockCatalog: search {:?}", query);
        Ok(self.results.get(query).cloned().unwrap_or_default())
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        info!("MockCatalog: add_tracks {} -> {} tracks", playlist_id, uris.len());
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), uris.to_vec()));
        Ok(())
    }
}
