use spotmood::mood::Mood;
use spotmood::types::AudioFeatures;
use spotmood::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());

    // Deterministic for the same verifier
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA256 digest is 32 bytes -> 43 chars of unpadded URL-safe base64
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_vector() {
    // Example from RFC 7636, appendix B
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("happy"), "Happy");
    assert_eq!(capitalize("eNERGETIC"), "Energetic");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_scatter_points_skips_missing_and_invalid() {
    let records = vec![
        Some(AudioFeatures::new(0.8, 0.9, 0.7)),
        None,
        Some(AudioFeatures::new(f64::NAN, 0.5, 0.5)),
        Some(AudioFeatures::new(0.6, 0.5, 0.4)),
    ];

    assert_eq!(scatter_points(&records), vec![(0.8, 0.9), (0.6, 0.5)]);
}

#[test]
fn test_scatter_points_empty() {
    assert!(scatter_points(&[]).is_empty());
}

#[test]
fn test_parse_mood() {
    assert_eq!(parse_mood("calm"), Ok(Mood::Calm));

    let err = parse_mood("furious").unwrap_err();
    assert!(err.contains("furious"));
}
