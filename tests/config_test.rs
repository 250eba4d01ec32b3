use spotmood::config::*;

#[test]
fn test_resolve_required_missing() {
    let err = resolve_required("SPOTIFY_API_AUTH_CLIENT_ID", None).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID")));
    assert_eq!(err.to_string(), "SPOTIFY_API_AUTH_CLIENT_ID must be set");
}

#[test]
fn test_resolve_required_blank_is_missing() {
    assert!(resolve_required("SPOTIFY_API_AUTH_CLIENT_ID", Some("   ".to_string())).is_err());
    assert!(resolve_required("SPOTIFY_API_AUTH_CLIENT_ID", Some(String::new())).is_err());
}

#[test]
fn test_resolve_required_present() {
    assert_eq!(
        resolve_required("SPOTIFY_API_AUTH_CLIENT_ID", Some("abc123".to_string())).unwrap(),
        "abc123"
    );
}

#[test]
fn test_resolve_or_falls_back_to_default() {
    assert_eq!(resolve_or(None, DEFAULT_API_URL), "https://api.spotify.com/v1");
    assert_eq!(
        resolve_or(Some(" ".to_string()), DEFAULT_SERVER_ADDRESS),
        "127.0.0.1:8888"
    );
    assert_eq!(
        resolve_or(Some("http://localhost:9000/v1".to_string()), DEFAULT_API_URL),
        "http://localhost:9000/v1"
    );
}

#[test]
fn test_defaults() {
    assert_eq!(DEFAULT_REDIRECT_URI, "http://127.0.0.1:8888/callback");
    assert!(DEFAULT_REDIRECT_URI.contains(DEFAULT_SERVER_ADDRESS));
    assert_eq!(
        DEFAULT_SCOPE,
        "user-library-read playlist-read-private playlist-modify-public user-top-read"
    );
    assert_eq!(DEFAULT_AUTH_URL, "https://accounts.spotify.com/authorize");
    assert_eq!(DEFAULT_TOKEN_URL, "https://accounts.spotify.com/api/token");
    assert_eq!(DEFAULT_PLOT_PATH, "mood_distribution.svg");
}
