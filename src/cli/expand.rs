use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Config,
    error,
    error::PipelineError,
    info,
    management::{RecordStore, SessionStore},
    pipeline::ExpansionPipeline,
    success,
    types::PlaylistSpec,
    warning,
};

/// Expands the `source` playlist into a new playlist named `name`.
///
/// Validation happens before anything else; the session is loaded from the
/// store, the pipeline runs with a spinner, and on success the playlist is
/// recorded in the local log.
pub async fn expand(config: Arc<Config>, source: &str, name: &str) {
    let spec = match PlaylistSpec::new(name, source) {
        Ok(spec) => spec,
        Err(e) => error!("{}", e),
    };

    let mut session = match SessionStore::load().await {
        Ok(session) => session,
        Err(e) => {
            error!(
                "Failed to load session. Please run playforge auth\n Error: {}",
                e
            );
        }
    };

    let pipeline = ExpansionPipeline::new(Arc::clone(&config));

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Expanding playlist {}...", spec.source_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = pipeline.run(session.tokens_mut(), &spec).await;
    pb.finish_and_clear();

    // The pipeline may have refreshed the access token; keep the session
    // current either way.
    if let Err(e) = session.persist().await {
        warning!("Failed to persist session: {}", e);
    }

    let report = match result {
        Ok(report) => report,
        Err(PipelineError::SessionExpired) => {
            error!("Session expired. Please run playforge auth again.");
        }
        Err(e) => error!("Playlist expansion failed: {}", e),
    };

    info!(
        "{} seed tracks produced {} suggestions",
        report.seed_count, report.suggestion_count
    );

    if !report.suggestion_chunks.is_clean() {
        warning!(
            "{} of {} recommendation requests failed; the result is incomplete",
            report.suggestion_chunks.failed.len(),
            report.suggestion_chunks.total()
        );
    }

    if !report.add_batches.is_clean() {
        warning!(
            "{} of {} track batches could not be added; the playlist is missing tracks",
            report.add_batches.failed.len(),
            report.add_batches.total()
        );
    }

    match report.playlist_url {
        Some(url) => {
            record_playlist(&config, &spec.name, &url).await;
            success!("Playlist created: {}", url);
        }
        None => {
            warning!(
                "Playlist {} was created but the provider returned no public link; nothing recorded.",
                report.playlist_id
            );
        }
    }
}

async fn record_playlist(config: &Config, name: &str, url: &str) {
    let store = match RecordStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => {
            warning!("Failed to open record store: {}", e);
            return;
        }
    };

    let today = chrono::Utc::now().date_naive();
    match store.insert(name, url, today, None).await {
        Ok(Some(record)) => info!("Recorded playlist as entry {}", record.id),
        Ok(None) => info!("Playlist link was already recorded"),
        Err(e) => warning!("Failed to record playlist: {}", e),
    }
}
