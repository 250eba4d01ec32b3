use clap::ValueEnum;

use crate::{
    config,
    spotify::client,
    types::{AudioFeatures, AudioFeaturesResponse, Track, TopTracksResponse},
};

/// Maximum number of ids the audio features endpoint accepts per request.
const AUDIO_FEATURES_BATCH: usize = 100;

/// Period Spotify computes the user's top tracks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeRange {
    /// Roughly the last 4 weeks
    Short,
    /// Roughly the last 6 months
    #[default]
    Medium,
    /// Several years of history
    Long,
}

impl TimeRange {
    pub fn as_query(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }
}

/// Retrieves the current user's top tracks (`GET /me/top/tracks`).
pub async fn top_tracks(
    token: &str,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<Track>, reqwest::Error> {
    let url = format!(
        "{uri}/me/top/tracks?limit={limit}&time_range={range}",
        uri = &config::spotify_apiurl(),
        limit = limit,
        range = time_range.as_query()
    );

    let res = client::get_json::<TopTracksResponse>(token, &url).await?;
    Ok(res.items)
}

/// Fetches audio features for the given track ids.
///
/// Requests are batched by 100 ids. The result has one entry per id in input
/// order; tracks Spotify has no features for come back as `None`.
pub async fn audio_features(
    token: &str,
    ids: &[String],
) -> Result<Vec<Option<AudioFeatures>>, reqwest::Error> {
    let mut features = Vec::with_capacity(ids.len());

    for chunk in ids.chunks(AUDIO_FEATURES_BATCH) {
        let url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = &config::spotify_apiurl(),
            ids = chunk.join(",")
        );

        let res = client::get_json::<AudioFeaturesResponse>(token, &url).await?;
        features.extend(res.audio_features);
    }

    Ok(features)
}
