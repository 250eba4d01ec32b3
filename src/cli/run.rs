use crate::{
    Res, config, error, focus, info,
    mood::Mood,
    spotify::{self, tracks::TimeRange},
    success,
};

use super::{
    analyze::{analyze_first_playlist, print_metrics},
    auth::access_token,
    create::create_mood_playlist,
    visualize::visualize_listening_history,
};

const TOP_TRACKS_LIMIT: u32 = 50;

/// Runs the whole session: connect, analyze the first playlist, create the
/// mood playlist and plot the listening history.
///
/// Any failure ends the session with a single message; Spotify API errors are
/// told apart from everything else.
pub async fn run(mood: Mood, public: bool) {
    if let Err(e) = session(mood, public).await {
        match e.downcast_ref::<reqwest::Error>() {
            Some(api_err) => error!("Spotify API error: {}", api_err),
            None => error!("An error occurred: {}", e),
        }
    }
}

async fn session(mood: Mood, public: bool) -> Res<()> {
    let token = access_token(true).await?;
    focus::for_platform().focus();

    let user = spotify::user::current_user(&token).await?;
    success!("Connected to Spotify as {}", user.name());

    if let Some(metrics) = analyze_first_playlist(&token).await? {
        print_metrics(&metrics);
    }

    let playlist = create_mood_playlist(&token, mood, public).await?;
    success!(
        "Created new playlist: {} (ID: {})",
        playlist.name,
        playlist.id
    );

    let path = config::plot_path();
    let count =
        visualize_listening_history(&token, &path, TOP_TRACKS_LIMIT, TimeRange::Medium).await?;
    info!("{} tracks plotted", count);
    success!("Visualization saved as '{}'", path.display());

    Ok(())
}
