use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    Res, config,
    focus::BrowserFocus,
    management::TokenManager,
    server::{bind_api_server, start_api_server},
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Maximum time to wait for the user to finish authorizing in the browser.
const AUTH_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs the OAuth 2.0 authorization code flow with PKCE.
///
/// 1. Generates the PKCE code verifier and its SHA256 challenge
/// 2. Binds and starts the local callback server
/// 3. Opens the authorization URL in the default browser and brings the
///    browser window to the front
/// 4. Waits up to 60 seconds for the callback to deliver a token
/// 5. Persists the token for later commands
///
/// # Arguments
///
/// * `shared_state` - PKCE slot shared with the callback handler
/// * `focus` - Brings the browser forward once the authorization page is open
///
/// # Errors
///
/// Fails when the client id is not configured, the callback server cannot
/// bind its address, the user does not finish in time, or the token cannot be
/// written to the cache. A browser that cannot
/// be opened is only a warning; the URL is printed for manual navigation.
pub async fn auth(
    shared_state: Arc<Mutex<Option<PkceToken>>>,
    focus: &dyn BrowserFocus,
) -> Res<Token> {
    let client_id = config::spotify_client_id()?;

    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let listener = bind_api_server(&config::server_addr()).await?;
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(listener, server_state).await;
    });

    let auth_url = authorization_url(&client_id, &code_challenge)?;

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }
    focus.focus();

    let token = wait_for_token(shared_state)
        .await
        .ok_or("Authentication failed or timed out.")?;

    TokenManager::new(token.clone())
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    Ok(token)
}

/// Builds the Spotify authorization URL with the PKCE challenge and the
/// configured redirect URI and scope, all query-encoded.
pub fn authorization_url(client_id: &str, code_challenge: &str) -> Res<Url> {
    let redirect_uri = config::spotify_redirect_uri();
    let scope = config::spotify_scope();

    let url = Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", scope.as_str()),
        ],
    )?;
    Ok(url)
}

/// Polls the shared state once a second until the callback handler stored a
/// token, giving up after [`AUTH_TIMEOUT`].
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < AUTH_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may rotate the refresh token; when the response carries none the
/// old one is kept.
pub async fn refresh_token(refresh_token: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;
    Ok(Token::from_response(
        json,
        Some(refresh_token),
        Utc::now().timestamp() as u64,
    ))
}

/// Exchanges the authorization code from the callback for an access token.
///
/// `verifier` must be the code verifier whose challenge was sent with the
/// authorization request.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;
    Ok(Token::from_response(
        json,
        None,
        Utc::now().timestamp() as u64,
    ))
}
