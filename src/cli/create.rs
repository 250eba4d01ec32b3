use crate::{Res, error, mood::Mood, spotify, success, types::CreatePlaylistResponse};

use super::auth::access_token;

pub async fn create(mood: Mood, public: bool) {
    let token = match access_token(false).await {
        Ok(t) => t,
        Err(e) => error!("{}", e),
    };

    match create_mood_playlist(&token, mood, public).await {
        Ok(playlist) => success!("Created new playlist: {} (ID: {})", playlist.name, playlist.id),
        Err(e) => error!("Failed to create playlist: {}", e),
    }
}

/// Creates an empty playlist named after `mood` for the current user.
pub(crate) async fn create_mood_playlist(
    token: &str,
    mood: Mood,
    public: bool,
) -> Res<CreatePlaylistResponse> {
    let user = spotify::user::current_user(token).await?;

    let playlist = spotify::playlists::create(
        token,
        &user.id,
        &mood.playlist_title(),
        public,
        &mood.playlist_description(),
    )
    .await?;

    Ok(playlist)
}
