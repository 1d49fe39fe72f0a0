use crate::api::Catalog;
use crate::models::{MatchResult, PlaylistEntry};
use anyhow::Result;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// Bracketed annotations: "(Official Video)", "[HD]", "{Remastered}", ...
static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[(\[{][^()\[\]{}]*[)\]}]").unwrap());

// Auto-generated uploader suffix on YouTube music channels: "Artist - Topic".
static TOPIC_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*-\s*topic\s*$").unwrap());

/// Strip bracketed annotations and uploader suffixes from a video title and
/// collapse runs of whitespace. The result is never longer than the input;
/// if stripping removes everything, the trimmed original is returned so the
/// search query is never empty.
pub fn normalize_title(raw: &str) -> String {
    let stripped = BRACKETED.replace_all(raw, " ");
    let stripped = TOPIC_SUFFIX.replace(&stripped, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        raw.trim().to_string()
    } else {
        collapsed
    }
}

/// Match one playlist entry against the catalog.
///
/// The search query is the normalized title; the remote ranking is trusted,
/// so the first candidate (if any) is the match. An empty result set is
/// `NoMatch`; search errors propagate unchanged, with no retry.
pub async fn match_entry(catalog: &dyn Catalog, entry: &PlaylistEntry) -> Result<MatchResult> {
    let query = normalize_title(&entry.title);
    debug!("matching {:?} via query {:?}", entry.title, query);
    let mut candidates = catalog.search_tracks(&query).await?;
    if candidates.is_empty() {
        return Ok(MatchResult::NoMatch);
    }
    Ok(MatchResult::Matched(candidates.remove(0)))
}
