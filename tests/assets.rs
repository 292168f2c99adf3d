use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tabletop_scene::{scene_objects, MeshKind, PixelLayout, SceneAssets, SceneConfig};
use tempfile::TempDir;

fn write_textures(dir: &Path) {
    for (index, name) in ["wood.jpg", "fabric.jpg", "dice.jpg", "box.jpg"].iter().enumerate() {
        let shade = 40 * index as u8;
        RgbImage::from_pixel(16, 8, Rgb([shade, 100, 200]))
            .save(dir.join(name))
            .expect("write jpeg");
    }
    // The candle image is stored with alpha to exercise the RGBA path.
    let candle = RgbaImage::from_pixel(4, 4, Rgba([250, 240, 220, 255]));
    candle
        .save_with_format(dir.join("candle.jpg"), image::ImageFormat::Png)
        .expect("write png");
}

#[test]
fn loads_every_asset_in_draw_order() {
    let dir = TempDir::new().expect("temp dir");
    write_textures(dir.path());

    let objects = scene_objects(&SceneConfig::default());
    let assets = SceneAssets::load(dir.path(), &objects).expect("assets load");

    assert_eq!(assets.programs.len(), 5);
    let labels: Vec<_> = assets.programs.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["table", "cloth", "die", "box", "candle"]);
    assert_eq!(assets.lamp_program.label(), "lamp");

    let names: Vec<_> = assets.textures.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["wood.jpg", "fabric.jpg", "dice.jpg", "box.jpg", "candle.jpg"]
    );
    assert_eq!(assets.textures[0].layout, PixelLayout::Rgb);
    assert_eq!(assets.textures[0].mip_level_count(), 5);
    assert_eq!(assets.textures[4].layout, PixelLayout::Rgba);

    assert_eq!(assets.meshes.len(), 5);
    assert_eq!(assets.mesh(MeshKind::Candle).map(|m| m.vertex_count), Some(75));
}

#[test]
fn missing_texture_is_named_in_the_error() {
    let dir = TempDir::new().expect("temp dir");
    write_textures(dir.path());
    std::fs::remove_file(dir.path().join("dice.jpg")).expect("remove texture");

    let objects = scene_objects(&SceneConfig::default());
    let err = SceneAssets::load(dir.path(), &objects).unwrap_err();
    assert_eq!(err.to_string(), "failed to load texture dice.jpg");
    assert!(format!("{err:?}").contains("dice.jpg"));
}
