use crate::types::{AudioFeatures, MoodMetrics};

/// Averages the mood fields over every valid record.
///
/// `None` entries and records failing [`AudioFeatures::is_valid`] are skipped.
/// With no valid record left every field is `0.0`.
pub fn aggregate(records: &[Option<AudioFeatures>]) -> MoodMetrics {
    let valid = records
        .iter()
        .flatten()
        .filter(|features| features.is_valid());

    let mut count = 0usize;
    let mut sum = MoodMetrics::default();
    for features in valid {
        sum.valence += features.valence;
        sum.energy += features.energy;
        sum.danceability += features.danceability;
        count += 1;
    }

    if count == 0 {
        return MoodMetrics::default();
    }

    let n = count as f64;
    MoodMetrics {
        valence: sum.valence / n,
        energy: sum.energy / n,
        danceability: sum.danceability / n,
    }
}
