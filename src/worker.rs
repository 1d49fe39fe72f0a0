use crate::api::{Catalog, PlaylistSource};
use crate::config::Config;
use crate::matcher;
use crate::models::{MatchResult, PlaylistEntry};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Summary of a one-shot sync run.
#[derive(Debug)]
pub struct SyncReport {
    pub playlist_title: String,
    pub total: usize,
    pub matched: usize,
    pub unmatched: Vec<PlaylistEntry>,
}

/// Run one synchronization pass: fetch all source entries, match each one in
/// playlist order, then append the matched URIs to the target playlist in
/// that same order.
///
/// Entries with no acceptable match are reported in the result and do not
/// abort the run; any other error aborts on first occurrence.
pub async fn run_sync(
    cfg: &Config,
    source: &dyn PlaylistSource,
    catalog: &dyn Catalog,
    source_playlist_id: &str,
    target_playlist_id: &str,
) -> Result<SyncReport> {
    let playlist_title = source
        .playlist_title(source_playlist_id)
        .await
        .with_context(|| format!("fetching {} playlist {}", source.name(), source_playlist_id))?;
    info!("found {} playlist: {:?}", source.name(), playlist_title);

    let entries = source
        .playlist_entries(source_playlist_id)
        .await
        .with_context(|| format!("listing entries of playlist {}", source_playlist_id))?;
    info!("playlist has {} entries", entries.len());

    let mut uris: Vec<String> = Vec::new();
    let mut unmatched: Vec<PlaylistEntry> = Vec::new();
    for entry in &entries {
        match matcher::match_entry(catalog, entry).await? {
            MatchResult::Matched(track) => {
                info!(
                    "matched {:?} -> {} ({} - {})",
                    entry.title,
                    track.uri,
                    track.artists.join(", "),
                    track.title
                );
                uris.push(track.uri);
            }
            MatchResult::NoMatch => {
                warn!("no match for {:?}", entry.title);
                unmatched.push(entry.clone());
            }
        }
    }

    for chunk in uris.chunks(cfg.max_batch_size_spotify.max(1)) {
        catalog
            .add_tracks(target_playlist_id, chunk)
            .await
            .with_context(|| format!("adding tracks to playlist {}", target_playlist_id))?;
    }
    info!(
        "added {} of {} tracks to {} playlist {}",
        uris.len(),
        entries.len(),
        catalog.name(),
        target_playlist_id
    );

    Ok(SyncReport {
        playlist_title,
        total: entries.len(),
        matched: uris.len(),
        unmatched,
    })
}
