use crate::{config, spotify::client, types::User};

/// Fetches the profile of the authorized user (`GET /me`).
pub async fn current_user(token: &str) -> Result<User, reqwest::Error> {
    let url = format!("{uri}/me", uri = &config::spotify_apiurl());
    client::get_json::<User>(token, &url).await
}
