use crate::{
    config,
    spotify::client,
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, GetUserPlaylistsResponse, Playlist,
        PlaylistTracksResponse,
    },
};

/// Maximum page size of the playlist items endpoint.
const PLAYLIST_TRACKS_PAGE_LIMIT: u32 = 100;

/// Retrieves the playlists owned or followed by the current user.
///
/// # Arguments
///
/// * `token` - Valid access token
/// * `limit` - Number of playlists to return (1-50)
pub async fn current_user_playlists(
    token: &str,
    limit: u32,
) -> Result<Vec<Playlist>, reqwest::Error> {
    let url = format!(
        "{uri}/me/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = limit
    );

    let res = client::get_json::<GetUserPlaylistsResponse>(token, &url).await?;
    Ok(res.items)
}

/// Collects the ids of all tracks in a playlist.
///
/// Follows the `next` link until every page is read. Entries without a track
/// (removed tracks) or without an id (local files) are skipped.
pub async fn playlist_track_ids(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let mut ids = Vec::new();
    let mut next = Some(format!(
        "{uri}/playlists/{playlist_id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id,
        limit = PLAYLIST_TRACKS_PAGE_LIMIT
    ));

    while let Some(url) = next {
        let page = client::get_json::<PlaylistTracksResponse>(token, &url).await?;
        ids.extend(page.track_ids());
        next = page.next;
    }

    Ok(ids)
}

/// Creates a playlist for `owner_id` (`POST /users/{owner_id}/playlists`).
///
/// # Returns
///
/// The created playlist, carrying the id and name Spotify assigned.
pub async fn create(
    token: &str,
    owner_id: &str,
    title: &str,
    public: bool,
    description: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = owner_id
    );

    let body = CreatePlaylistRequest {
        name: title.to_string(),
        description: description.to_string(),
        public,
    };

    client::post_json::<_, CreatePlaylistResponse>(token, &url, &body).await
}
