//! # API Module
//!
//! HTTP endpoints of the local callback server that runs while `spotmood auth`
//! waits for the user to authorize the application in the browser.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code from Spotify's
//!   authorization server, exchanges it (together with the PKCE code verifier)
//!   for an access token and hands the token to the waiting auth flow.
//! - [`health`] - Returns status and version, handy for checking that the
//!   redirect URI points at the right port.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotmood::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
