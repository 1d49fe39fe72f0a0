use mockito::Server;
use serde_json::json;
use std::env;
use youtube_playlist_spotify_sync::api::spotify::SpotifyCatalog;
use youtube_playlist_spotify_sync::api::Catalog;
use youtube_playlist_spotify_sync::error::SyncError;

#[test]
fn spotify_add_tracks_status_handling() {
    let mut server = Server::new();
    env::set_var("SPOTIFY_API_BASE", server.url());

    let _m_ok = server
        .mock("POST", "/playlists/plok/tracks")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({ "snapshot_id": "s1" }).to_string())
        .create();

    let _m_unauthorized = server
        .mock("POST", "/playlists/pl401/tracks")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": { "status": 401 } }).to_string())
        .create();

    let _m_missing = server
        .mock("POST", "/playlists/pl404/tracks")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": { "status": 404 } }).to_string())
        .create();

    let _m_limited = server
        .mock("POST", "/playlists/pl429/tracks")
        .with_status(429)
        .with_header("retry-after", "7")
        .with_body("{}")
        .create();

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async move {
        let catalog = SpotifyCatalog::new("sp-token".into());
        let uris = vec!["spotify:track:id123".to_string()];

        catalog.add_tracks("plok", &uris).await.unwrap();

        let err = catalog.add_tracks("pl401", &uris).await.unwrap_err();
        match err.downcast_ref::<SyncError>() {
            Some(SyncError::Auth { service, status }) => {
                assert_eq!(*service, "spotify");
                assert_eq!(*status, 401);
            }
            other => panic!("expected Auth, got {:?}", other),
        }

        let err = catalog.add_tracks("pl404", &uris).await.unwrap_err();
        match err.downcast_ref::<SyncError>() {
            Some(SyncError::NotFound(id)) => assert_eq!(id, "pl404"),
            other => panic!("expected NotFound, got {:?}", other),
        }

        // Rate limiting is surfaced, not retried.
        let err = catalog.add_tracks("pl429", &uris).await.unwrap_err();
        assert!(err.to_string().contains("rate_limited"));
        assert!(err.to_string().contains("7"));
    });
}
