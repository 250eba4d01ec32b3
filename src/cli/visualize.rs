use std::path::{Path, PathBuf};

use crate::{
    Res, config, error, plot,
    spotify::{self, tracks::TimeRange},
    success, utils,
};

use super::auth::access_token;

pub async fn visualize(output: Option<PathBuf>, limit: u32, time_range: TimeRange) {
    let token = match access_token(false).await {
        Ok(t) => t,
        Err(e) => error!("{}", e),
    };

    let path = output.unwrap_or_else(config::plot_path);
    match visualize_listening_history(&token, &path, limit, time_range).await {
        Ok(count) => success!(
            "Visualization of {} tracks saved as '{}'",
            count,
            path.display()
        ),
        Err(e) => error!("Failed to create visualization: {}", e),
    }
}

/// Plots the valence and energy of the user's top tracks.
///
/// Returns the number of tracks drawn.
pub(crate) async fn visualize_listening_history(
    token: &str,
    path: &Path,
    limit: u32,
    time_range: TimeRange,
) -> Res<usize> {
    let pb = utils::spinner("Fetching top tracks audio features...");

    let result = async {
        let top_tracks = spotify::tracks::top_tracks(token, limit, time_range).await?;
        let ids: Vec<String> = top_tracks.into_iter().filter_map(|t| t.id).collect();
        spotify::tracks::audio_features(token, &ids).await
    }
    .await;
    pb.finish_and_clear();

    let points = utils::scatter_points(&result?);
    plot::render_scatter(path, &points)?;
    Ok(points.len())
}
