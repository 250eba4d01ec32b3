use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Body of the token endpoint response for both code exchange and refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

impl Token {
    /// Builds a token from a token endpoint response obtained at `obtained_at`.
    ///
    /// A refresh response may omit the refresh token, in which case
    /// `previous_refresh_token` is kept.
    pub fn from_response(
        response: TokenResponse,
        previous_refresh_token: Option<&str>,
        obtained_at: u64,
    ) -> Self {
        Token {
            access_token: response.access_token,
            refresh_token: response
                .refresh_token
                .or_else(|| previous_refresh_token.map(str::to_string))
                .unwrap_or_default(),
            scope: response.scope.unwrap_or_default(),
            expires_in: response.expires_in,
            obtained_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

impl User {
    /// Name to greet the user with; falls back to the user id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

/// Audio features the provider computed for a single track.
///
/// Only `valence`, `energy` and `danceability` feed the mood metrics; the
/// remaining fields are kept for display and are optional because the
/// provider does not always send them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub id: Option<String>,
    pub valence: f64,
    pub energy: f64,
    pub danceability: f64,
    #[serde(default)]
    pub tempo: Option<f64>,
    #[serde(default)]
    pub acousticness: Option<f64>,
}

impl AudioFeatures {
    pub fn new(valence: f64, energy: f64, danceability: f64) -> Self {
        Self {
            id: None,
            valence,
            energy,
            danceability,
            tempo: None,
            acousticness: None,
        }
    }

    /// A record is usable when all three mood fields are finite and in `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        [self.valence, self.energy, self.danceability]
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    #[serde(deserialize_with = "lenient_audio_features")]
    pub audio_features: Vec<Option<AudioFeatures>>,
}

/// Entries that do not parse as [`AudioFeatures`] (null, missing or non-numeric
/// fields) become `None` instead of failing the whole batch.
fn lenient_audio_features<'de, D>(
    deserializer: D,
) -> Result<Vec<Option<AudioFeatures>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value::<AudioFeatures>(entry).ok())
        .collect())
}

/// Mean valence, energy and danceability over a set of tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodMetrics {
    pub valence: f64,
    pub energy: f64,
    pub danceability: f64,
}

impl fmt::Display for MoodMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "valence: {}, energy: {}, danceability: {}",
            self.valence, self.energy, self.danceability
        )
    }
}

#[derive(Tabled)]
pub struct MoodMetricsTableRow {
    pub metric: String,
    pub value: f64,
}

impl MoodMetrics {
    pub fn table_rows(&self) -> Vec<MoodMetricsTableRow> {
        vec![
            MoodMetricsTableRow {
                metric: "valence".to_string(),
                value: self.valence,
            },
            MoodMetricsTableRow {
                metric: "energy".to_string(),
                value: self.energy,
            },
            MoodMetricsTableRow {
                metric: "danceability".to_string(),
                value: self.danceability,
            },
        ]
    }
}

#[derive(Tabled)]
pub struct MoodProfileTableRow {
    pub mood: String,
    pub valence: f64,
    pub energy: f64,
    pub playlist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
}

impl PlaylistTracksResponse {
    /// Ids of the tracks on this page, skipping removed tracks and local files.
    pub fn track_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .filter_map(|track| track.id.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}
