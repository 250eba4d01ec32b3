//! Configuration management for the Spotify mood analyzer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Values are resolved in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str =
    "user-library-read playlist-read-private playlist-modify-public user-top-read";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_PLOT_PATH: &str = "mood_distribution.svg";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist, then loads
/// `spotmood/.env` from it and finally a `.env` in the working directory.
/// Variables that are already set are never overwritten, and missing files
/// are not an error since the environment itself may carry every value.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotmood/.env`
/// - macOS: `~/Library/Application Support/spotmood/.env`
/// - Windows: `%LOCALAPPDATA%/spotmood/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the application's directory inside the platform data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotmood");
    path
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Client id of the registered Spotify application (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] when the variable is unset or empty. There
/// is no sensible default for it.
pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// OAuth redirect URI (`SPOTIFY_API_REDIRECT_URI`).
///
/// Must match a redirect URI registered in the Spotify application settings and
/// point at [`server_addr`] with the `/callback` path.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Permissions requested during authorization (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Spotify OAuth authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Spotify OAuth token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Name of the browser application to focus during authorization
/// (`BROWSER_APP_NAME`), if configured.
pub fn browser_app_name() -> Option<String> {
    env::var("BROWSER_APP_NAME")
        .ok()
        .filter(|name| !name.trim().is_empty())
}

/// Default output path of the mood scatterplot (`MOOD_PLOT_PATH`).
pub fn plot_path() -> PathBuf {
    PathBuf::from(var_or("MOOD_PLOT_PATH", DEFAULT_PLOT_PATH))
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    resolve_required(key, env::var(key).ok())
}

fn var_or(key: &str, default: &str) -> String {
    resolve_or(env::var(key).ok(), default)
}

/// Resolves a required setting; unset and blank values are missing.
pub fn resolve_required(key: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

/// Resolves an optional setting; unset and blank values fall back to `default`.
pub fn resolve_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
