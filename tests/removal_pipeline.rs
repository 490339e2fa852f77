//! End-to-end tests for the file-to-file removal pipeline

use bgstrip::{remove_background, BgStripError};
use image::{Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

/// 64x64 white canvas with a 32x32 red square centered on it
fn subject_fixture() -> RgbImage {
    let mut img = RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]));
    for y in 16..48 {
        for x in 16..48 {
            img.put_pixel(x, y, Rgb([210, 30, 30]));
        }
    }
    img
}

fn write_fixture(dir: &Path, name: &str, image: &RgbImage) -> std::path::PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn output_dimensions_match_input() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "input.png", &subject_fixture());
    let output = dir.path().join("output.png");

    let result = remove_background(&input, &output).unwrap();
    assert_eq!(result.dimensions(), (64, 64));

    let decoded = image::open(&output).unwrap();
    assert_eq!(decoded.width(), 64);
    assert_eq!(decoded.height(), 64);
}

#[test]
fn output_separates_foreground_from_background() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "input.png", &subject_fixture());
    let output = dir.path().join("output.png");

    remove_background(&input, &output).unwrap();

    let decoded = image::open(&output).unwrap();
    assert!(decoded.color().has_alpha());

    let rgba = decoded.to_rgba8();
    // Known background region: near-transparent
    assert!(rgba.get_pixel(2, 2).0[3] < 32);
    assert!(rgba.get_pixel(61, 61).0[3] < 32);
    // Known foreground region: near-opaque
    assert!(rgba.get_pixel(32, 32).0[3] > 223);
}

#[test]
fn foreground_keeps_original_color() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "input.png", &subject_fixture());
    let output = dir.path().join("output.png");

    remove_background(&input, &output).unwrap();

    let rgba = image::open(&output).unwrap().to_rgba8();
    let center = rgba.get_pixel(32, 32).0;
    assert_eq!(&center[..3], &[210, 30, 30]);
}

#[test]
fn jpeg_input_is_accepted() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "input.jpg", &subject_fixture());
    let output = dir.path().join("output.png");

    let result = remove_background(&input, &output).unwrap();
    assert_eq!(result.dimensions(), (64, 64));
    assert!(output.exists());
}

#[test]
fn missing_input_fails_without_creating_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does-not-exist.png");
    let output = dir.path().join("output.png");

    let err = remove_background(&input, &output).unwrap_err();
    assert!(matches!(err, BgStripError::Io(_)));
    assert!(err.to_string().contains("does-not-exist.png"));
    assert!(!output.exists());
}

#[test]
fn corrupt_input_fails_without_creating_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("corrupt.png");
    std::fs::write(&input, b"not an image at all").unwrap();
    let output = dir.path().join("output.png");

    let err = remove_background(&input, &output).unwrap_err();
    assert!(matches!(err, BgStripError::Decode(_)));
    assert!(!output.exists());
}

#[test]
fn missing_output_parent_fails_without_creating_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "input.png", &subject_fixture());
    let output = dir.path().join("no-such-dir").join("output.png");

    let err = remove_background(&input, &output).unwrap_err();
    assert!(matches!(err, BgStripError::Io(_)));
    assert!(!output.exists());
}

#[test]
fn tiny_uniform_input_completes() {
    let dir = TempDir::new().unwrap();
    let fixture = RgbImage::from_pixel(2, 2, Rgb([0, 120, 200]));
    let input = write_fixture(dir.path(), "solid.png", &fixture);
    let output = dir.path().join("output.png");

    // No distinguishable foreground: must still complete, not fault
    let result = remove_background(&input, &output).unwrap();
    assert_eq!(result.dimensions(), (2, 2));
    assert_eq!(result.mask.statistics().foreground_pixels, 0);
    assert!(output.exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "input.png", &subject_fixture());
    let output = dir.path().join("output.png");

    remove_background(&input, &output).unwrap();
    let first = std::fs::read(&output).unwrap();

    remove_background(&input, &output).unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}
