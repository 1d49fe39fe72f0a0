//! Core library for youtube-playlist-spotify-sync
pub mod config;
pub mod error;
pub mod models;
pub mod api;
pub mod matcher;
pub mod worker;
