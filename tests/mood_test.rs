use spotmood::mood::{Mood, MoodError, aggregate, profile_for};
use spotmood::types::{AudioFeatures, MoodMetrics};

const EPSILON: f64 = 1e-12;

fn record(valence: f64, energy: f64, danceability: f64) -> Option<AudioFeatures> {
    Some(AudioFeatures::new(valence, energy, danceability))
}

fn assert_metrics_close(actual: MoodMetrics, valence: f64, energy: f64, danceability: f64) {
    assert!(
        (actual.valence - valence).abs() < EPSILON,
        "valence {} != {}",
        actual.valence,
        valence
    );
    assert!(
        (actual.energy - energy).abs() < EPSILON,
        "energy {} != {}",
        actual.energy,
        energy
    );
    assert!(
        (actual.danceability - danceability).abs() < EPSILON,
        "danceability {} != {}",
        actual.danceability,
        danceability
    );
}

#[test]
fn test_aggregate_empty_is_neutral() {
    let metrics = aggregate(&[]);
    assert_eq!(
        metrics,
        MoodMetrics {
            valence: 0.0,
            energy: 0.0,
            danceability: 0.0
        }
    );
}

#[test]
fn test_aggregate_only_missing_entries_is_neutral() {
    let metrics = aggregate(&[None, None]);
    assert_eq!(metrics, MoodMetrics::default());
}

#[test]
fn test_aggregate_single_record() {
    let metrics = aggregate(&[record(0.25, 0.5, 0.75)]);
    assert_eq!(
        metrics,
        MoodMetrics {
            valence: 0.25,
            energy: 0.5,
            danceability: 0.75
        }
    );
}

#[test]
fn test_aggregate_mean_of_records() {
    let records = vec![
        record(0.1, 0.2, 0.3),
        record(0.4, 0.5, 0.6),
        record(0.7, 0.8, 0.9),
    ];

    assert_metrics_close(aggregate(&records), 0.4, 0.5, 0.6);
}

#[test]
fn test_aggregate_skips_missing_records() {
    let with_missing = vec![record(0.8, 0.9, 0.7), None, record(0.6, 0.5, 0.4)];
    let without = vec![record(0.8, 0.9, 0.7), record(0.6, 0.5, 0.4)];

    assert_eq!(aggregate(&with_missing), aggregate(&without));
}

#[test]
fn test_aggregate_end_to_end_scenario() {
    let records = vec![record(0.8, 0.9, 0.7), record(0.6, 0.5, 0.4), None];
    assert_metrics_close(aggregate(&records), 0.7, 0.7, 0.55);
}

#[test]
fn test_aggregate_skips_invalid_values() {
    let records = vec![
        record(0.5, 0.5, 0.5),
        record(f64::NAN, 0.1, 0.1),
        record(0.1, f64::INFINITY, 0.1),
        record(1.5, 0.1, 0.1),
        record(0.1, 0.1, -0.2),
    ];

    assert_eq!(
        aggregate(&records),
        MoodMetrics {
            valence: 0.5,
            energy: 0.5,
            danceability: 0.5
        }
    );
}

#[test]
fn test_aggregate_accepts_bounds() {
    let records = vec![record(0.0, 0.0, 0.0), record(1.0, 1.0, 1.0)];
    assert_eq!(
        aggregate(&records),
        MoodMetrics {
            valence: 0.5,
            energy: 0.5,
            danceability: 0.5
        }
    );
}

#[test]
fn test_aggregate_order_independent() {
    let records = vec![
        record(0.81, 0.12, 0.33),
        record(0.05, 0.97, 0.64),
        None,
        record(0.42, 0.58, 0.11),
        record(0.99, 0.01, 0.87),
    ];
    let expected = aggregate(&records);

    let mut reversed = records.clone();
    reversed.reverse();
    let mut rotated = records.clone();
    rotated.rotate_left(2);

    for permutation in [reversed, rotated] {
        let metrics = aggregate(&permutation);
        assert_metrics_close(
            metrics,
            expected.valence,
            expected.energy,
            expected.danceability,
        );
    }
}

#[test]
fn test_aggregate_is_idempotent() {
    let records = vec![record(0.33, 0.66, 0.99), None, record(0.17, 0.29, 0.41)];

    let first = aggregate(&records);
    let second = aggregate(&records);

    assert_eq!(first.valence.to_bits(), second.valence.to_bits());
    assert_eq!(first.energy.to_bits(), second.energy.to_bits());
    assert_eq!(first.danceability.to_bits(), second.danceability.to_bits());
}

#[test]
fn test_profile_for_known_labels() {
    let expected = [
        ("happy", Mood::Happy, 0.7, 0.7),
        ("sad", Mood::Sad, 0.3, 0.3),
        ("energetic", Mood::Energetic, 0.6, 0.8),
        ("calm", Mood::Calm, 0.5, 0.3),
    ];

    for (label, mood, valence, energy) in expected {
        let profile = profile_for(label).unwrap();
        assert_eq!(profile.mood, mood);
        assert_eq!(profile.valence, valence);
        assert_eq!(profile.energy, energy);
    }
}

#[test]
fn test_profile_for_unknown_label() {
    assert_eq!(
        profile_for("furious"),
        Err(MoodError::UnknownMoodLabel("furious".to_string()))
    );
    assert!(profile_for("").is_err());
}

#[test]
fn test_profile_for_requires_exact_lowercase() {
    assert!(profile_for("Happy").is_err());
    assert!(profile_for("HAPPY").is_err());
    assert!(profile_for(" happy").is_err());
}

#[test]
fn test_profiles_within_unit_square() {
    for mood in Mood::ALL {
        let profile = mood.profile();
        assert!((0.0..=1.0).contains(&profile.valence));
        assert!((0.0..=1.0).contains(&profile.energy));
        assert_eq!(profile.mood, mood);
    }
}

#[test]
fn test_mood_label_roundtrip() {
    for mood in Mood::ALL {
        assert_eq!(mood.label().parse::<Mood>(), Ok(mood));
        assert_eq!(mood.to_string(), mood.label());
    }
}

#[test]
fn test_playlist_title_and_description() {
    assert_eq!(Mood::Happy.playlist_title(), "My Happy Playlist");
    assert_eq!(
        Mood::Happy.playlist_description(),
        "Auto-generated happy mood playlist"
    );
    assert_eq!(Mood::Energetic.playlist_title(), "My Energetic Playlist");
    assert_eq!(
        Mood::Calm.playlist_description(),
        "Auto-generated calm mood playlist"
    );
}

#[test]
fn test_unknown_label_error_message() {
    let err = "furious".parse::<Mood>().unwrap_err();
    assert!(err.to_string().contains("unknown mood label 'furious'"));
}
