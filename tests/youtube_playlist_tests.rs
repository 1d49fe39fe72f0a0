use mockito::{Matcher, Server};
use serde_json::json;
use std::env;
use youtube_playlist_spotify_sync::api::youtube::YouTubeSource;
use youtube_playlist_spotify_sync::api::PlaylistSource;

#[test]
fn youtube_title_and_paginated_entries() {
    // Create mock server outside of any tokio runtime
    let mut server = Server::new();
    env::set_var("YOUTUBE_API_BASE", server.url());

    let _m_playlist = server
        .mock("GET", "/playlists")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [ { "snippet": { "title": "Road Trip" } } ]
            })
            .to_string(),
        )
        .create();

    // First page carries a nextPageToken, second page does not.
    let _m_page1 = server
        .mock("GET", "/playlistItems")
        .match_query(Matcher::Exact(
            "part=snippet&maxResults=50&playlistId=PL1&key=yt-token".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [
                    { "snippet": { "title": "First Song", "position": 0,
                                   "resourceId": { "videoId": "v0" } } },
                    { "snippet": { "title": "Second Song", "position": 1,
                                   "resourceId": { "videoId": "v1" } } }
                ],
                "nextPageToken": "tok2"
            })
            .to_string(),
        )
        .create();

    let _m_page2 = server
        .mock("GET", "/playlistItems")
        .match_query(Matcher::Exact(
            "part=snippet&maxResults=50&playlistId=PL1&key=yt-token&pageToken=tok2".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [
                    { "snippet": { "title": "Third Song", "position": 2,
                                   "resourceId": { "videoId": "v2" } } }
                ]
            })
            .to_string(),
        )
        .create();

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async move {
        let source = YouTubeSource::new("yt-token".into());

        let title = source.playlist_title("PL1").await.unwrap();
        assert_eq!(title, "Road Trip");

        let entries = source.playlist_entries("PL1").await.unwrap();
        assert_eq!(entries.len(), 3);
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First Song", "Second Song", "Third Song"]);
        assert_eq!(entries[2].video_id, "v2");
        assert_eq!(entries[2].position, 2);
    });
}
