use anyhow::Result;

use tabletop_scene::{app, scene_objects, SceneAssets, SceneConfig, WindowConfig};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let scene = SceneConfig::default();
    let objects = scene_objects(&scene);
    // Textures are looked up relative to the working directory.
    let assets = SceneAssets::load(".", &objects)?;
    app::run(WindowConfig::default(), scene, assets, objects)
}
