use tabled::Table;

use crate::{
    Res, error, info, mood, spotify,
    types::{MoodMetrics, Playlist},
    utils, warning,
};

use super::auth::access_token;

pub async fn analyze(playlist_id: Option<String>) {
    let token = match access_token(false).await {
        Ok(t) => t,
        Err(e) => error!("{}", e),
    };

    let result = match playlist_id {
        Some(id) => analyze_playlist_mood(&token, &id).await.map(Some),
        None => analyze_first_playlist(&token).await,
    };

    match result {
        Ok(Some(metrics)) => print_metrics(&metrics),
        Ok(None) => {}
        Err(e) => error!("Failed to analyze playlist: {}", e),
    }
}

/// Analyzes the first playlist of the current user.
///
/// Returns `None` when the account has no playlists.
pub(crate) async fn analyze_first_playlist(token: &str) -> Res<Option<MoodMetrics>> {
    let playlists: Vec<Playlist> = spotify::playlists::current_user_playlists(token, 1).await?;

    let Some(playlist) = playlists.first() else {
        warning!("No playlists found in your account");
        return Ok(None);
    };

    info!("Analyzing playlist: {}", playlist.name);
    let metrics = analyze_playlist_mood(token, &playlist.id).await?;
    Ok(Some(metrics))
}

/// Fetches the audio features of every track in the playlist and averages them.
pub async fn analyze_playlist_mood(token: &str, playlist_id: &str) -> Res<MoodMetrics> {
    let pb = utils::spinner("Fetching playlist audio features...");

    let result = async {
        let track_ids = spotify::playlists::playlist_track_ids(token, playlist_id).await?;
        spotify::tracks::audio_features(token, &track_ids).await
    }
    .await;
    pb.finish_and_clear();

    let features = result?;
    let valid = features.iter().flatten().filter(|f| f.is_valid()).count();
    if valid < features.len() {
        warning!(
            "{} of {} tracks have no usable audio features and were skipped",
            features.len() - valid,
            features.len()
        );
    }

    Ok(mood::aggregate(&features))
}

pub(crate) fn print_metrics(metrics: &MoodMetrics) {
    info!("Playlist Mood Metrics: {}", metrics);
    println!("{}", Table::new(metrics.table_rows()));
}
