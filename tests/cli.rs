use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use image::{GrayImage, Luma, Rgb, RgbImage};
use predicates::str::contains;
use tempfile::TempDir;

const TEXTURES: [&str; 5] = ["wood.jpg", "fabric.jpg", "dice.jpg", "box.jpg", "candle.jpg"];

fn write_texture(dir: &Path, name: &str) {
    let image = RgbImage::from_pixel(8, 8, Rgb([180, 120, 60]));
    image.save(dir.join(name)).expect("write texture");
}

#[test]
fn fails_naming_the_first_missing_texture() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = Command::cargo_bin("tabletop-scene").expect("binary exists");
    cmd.current_dir(dir.path());
    cmd.assert()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("failed to load texture wood.jpg"));
}

#[test]
fn fails_when_a_later_texture_is_missing() {
    let dir = TempDir::new().expect("temp dir");
    for name in TEXTURES.iter().filter(|name| **name != "fabric.jpg") {
        write_texture(dir.path(), name);
    }
    let mut cmd = Command::cargo_bin("tabletop-scene").expect("binary exists");
    cmd.current_dir(dir.path());
    cmd.assert()
        .code(1)
        .stderr(contains("failed to load texture fabric.jpg"));
}

#[test]
fn rejects_single_channel_textures() {
    let dir = TempDir::new().expect("temp dir");
    GrayImage::from_pixel(8, 8, Luma([90]))
        .save(dir.path().join("wood.jpg"))
        .expect("write texture");
    let mut cmd = Command::cargo_bin("tabletop-scene").expect("binary exists");
    cmd.current_dir(dir.path());
    cmd.assert()
        .code(1)
        .stderr(contains("failed to load texture wood.jpg"))
        .stderr(contains("not implemented to handle image with 1 channels"));
}
