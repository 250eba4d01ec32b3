//! # CLI Module
//!
//! User-facing commands of spotmood. Each command loads the cached access
//! token, calls into [`crate::spotify`] for data, hands the data to
//! [`crate::mood`] for the computations and prints the result.
//!
//! ## Commands
//!
//! - [`auth`] - Authorize with Spotify (OAuth 2.0 PKCE)
//! - [`analyze`] - Mean valence, energy and danceability of a playlist
//! - [`create`] - Create a mood playlist such as "My Happy Playlist"
//! - [`visualize`] - Scatterplot of the top tracks' valence and energy
//! - [`moods`] - List the known mood profiles
//! - [`run`] - Everything above in one go, authorizing first when needed
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotmood auth                              # Authenticate with Spotify
//! spotmood analyze                           # Analyze your first playlist
//! spotmood analyze --playlist 37i9dQZF1DX... # Analyze a specific playlist
//! spotmood create --mood calm                # Create "My Calm Playlist"
//! spotmood visualize --time-range long       # Plot long-term top tracks
//! spotmood run                               # The whole session
//! ```
//!
//! ## Error Handling
//!
//! Single commands terminate through [`crate::error!`] with a hint on how to
//! recover. `run` reports the first failure once and stops.

mod analyze;
mod auth;
mod create;
mod moods;
mod run;
mod visualize;

pub use analyze::analyze;
pub use analyze::analyze_playlist_mood;
pub use auth::auth;
pub use create::create;
pub use moods::moods;
pub use run::run;
pub use visualize::visualize;
