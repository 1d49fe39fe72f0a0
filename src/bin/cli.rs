use anyhow::Result;
use clap::Parser;
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use youtube_playlist_spotify_sync as lib;

use lib::api::spotify::{self, SpotifyCatalog};
use lib::api::youtube::{self, YouTubeSource};
use lib::config::Config;
use lib::error::SyncError;
use lib::worker::{run_sync, SyncReport};

#[derive(Parser)]
#[command(name = "youtube-playlist-spotify-sync", version)]
#[command(about = "Add the tracks of a YouTube playlist to an existing Spotify playlist")]
struct Cli {
    /// YouTube playlist URL (or bare playlist id)
    youtube_playlist: String,

    /// Target Spotify playlist: URL, spotify:playlist: URI, or bare id
    #[arg(short, long, value_name = "PLAYLIST")]
    playlist: String,
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SyncError>() {
        Some(SyncError::Config(_)) => 2,
        _ => 1,
    }
}

async fn run(cli: &Cli) -> Result<SyncReport> {
    // Config is validated up front; a missing token fails before any
    // network call is attempted.
    let cfg = Config::from_env()?;

    let source_playlist_id = youtube::playlist_id_from_url(&cli.youtube_playlist)?;
    let target_playlist_id = spotify::playlist_id_from_arg(&cli.playlist)?;

    let source = YouTubeSource::new(cfg.youtube_token.clone());
    let catalog = SpotifyCatalog::new(cfg.spotify_token.clone());

    run_sync(&cfg, &source, &catalog, &source_playlist_id, &target_playlist_id).await
}

#[tokio::main]
async fn main() {
    // Bridge log macros into tracing, then log to stdout honoring RUST_LOG
    // (default info).
    let _ = LogTracer::init();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set global tracing subscriber");

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(report) => {
            println!(
                "Synced {:?}: {} of {} entries matched.",
                report.playlist_title, report.matched, report.total
            );
            for entry in &report.unmatched {
                println!("- unmatched: {}", entry.title);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_code(&e));
        }
    }
}
