//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the mood analyzer needs.
//! Every function takes an access token and returns plain data structures, so
//! the mood computations never hold on to a client handle.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 authorization code flow with PKCE, token exchange
//!   and refresh
//! - [`client`] - Shared request helpers with retry handling for `502` and
//!   `429` responses
//! - [`user`] - Profile of the authorized user
//! - [`playlists`] - Listing the user's playlists, reading playlist tracks and
//!   creating new playlists
//! - [`tracks`] - Top tracks and audio features
//!
//! ## API Coverage
//!
//! - `GET /me`
//! - `GET /me/playlists`
//! - `GET /playlists/{playlist_id}/tracks`
//! - `POST /users/{user_id}/playlists`
//! - `GET /me/top/tracks`
//! - `GET /audio-features`
//! - `POST /api/token` (accounts service)
//!
//! ## Usage
//!
//! ```rust,ignore
//! let ids = spotify::playlists::playlist_track_ids(&token, &playlist_id).await?;
//! let features = spotify::tracks::audio_features(&token, &ids).await?;
//! let metrics = mood::aggregate(&features);
//! ```
//!
//! ## Errors
//!
//! API calls return `reqwest::Error`. The authentication functions return
//! [`crate::Res`] since they also fail on missing configuration.

pub mod auth;
pub mod client;
pub mod playlists;
pub mod tracks;
pub mod user;
