//! End-to-end classification tests.
//!
//! Note: These tests require an actual TFLite model, labels file and test
//! image. They are skipped if the fixture environment variables are not set.

#![allow(clippy::unwrap_used)]

use naturid::config::{CategoryConfig, Config};
use naturid::pipeline::SpeciesIdentifier;
use std::path::PathBuf;

fn fixture_paths() -> Option<(PathBuf, PathBuf, PathBuf)> {
    // Return (model, labels, image) if available, None to skip
    let model = std::env::var("NATURID_TEST_MODEL").ok()?;
    let labels = std::env::var("NATURID_TEST_LABELS").ok()?;
    let image = std::env::var("NATURID_TEST_IMAGE").ok()?;
    Some((
        PathBuf::from(model),
        PathBuf::from(labels),
        PathBuf::from(image),
    ))
}

#[test]
fn test_classify_end_to_end() {
    let Some((model, labels, image)) = fixture_paths() else {
        eprintln!("Skipping integration test - model fixtures not configured");
        eprintln!("Set NATURID_TEST_MODEL, NATURID_TEST_LABELS and NATURID_TEST_IMAGE to run");
        return;
    };

    let mut config = Config::default();
    config
        .categories
        .insert("fixture".to_string(), CategoryConfig { model, labels });

    let mut identifier = SpeciesIdentifier::new(config);
    let classification = identifier.classify("fixture", &image).unwrap();

    // Display format is "{common} ({scientific})" whatever the model says
    let display = classification.to_string();
    assert!(display.ends_with(')'));
    assert!(display.contains('('));
}

#[test]
fn test_classify_twice_reuses_cached_engine() {
    let Some((model, labels, image)) = fixture_paths() else {
        eprintln!("Skipping integration test - model fixtures not configured");
        return;
    };

    let mut config = Config::default();
    config
        .categories
        .insert("fixture".to_string(), CategoryConfig { model, labels });

    let mut identifier = SpeciesIdentifier::new(config);
    let first = identifier.classify("fixture", &image).unwrap();
    let second = identifier.classify("fixture", &image).unwrap();

    // Deterministic preprocessing and inference: same image, same result
    assert_eq!(first, second);
}
