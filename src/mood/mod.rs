//! # Mood Module
//!
//! Pure computations behind the mood analysis. Nothing here talks to Spotify;
//! callers hand in audio features that were already fetched.
//!
//! - [`aggregate`] averages valence, energy and danceability over a set of
//!   tracks, skipping entries the provider could not compute.
//! - [`Mood`] is the closed set of mood labels, each mapping to a fixed
//!   [`MoodProfile`] in (valence, energy) space.

mod aggregate;
mod profile;

pub use aggregate::aggregate;
pub use profile::{Mood, MoodError, MoodProfile, profile_for};
