//! Textured, Phong-lit tabletop scene rendered with wgpu.
//!
//! Everything that can be prepared without a window (vertex data, texture
//! decoding, shader compilation and linking) lives in plain modules so it can
//! be exercised headless. The [`app`] and [`render`] modules own the window
//! and the GPU.

pub mod app;
pub mod assets;
pub mod camera;
pub mod input;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod shader;
pub mod texture;

pub use assets::SceneAssets;
pub use camera::{Camera, CameraMovement};
pub use input::{InputState, KeyAction};
pub use mesh::{MeshData, MeshError, MeshKind, Vertex};
pub use render::Renderer;
pub use scene::{
    scene_objects, FrameParams, ProjectionMode, RenderableObject, SceneConfig, SceneState,
    WindowConfig,
};
pub use shader::{PhongMaterial, ProgramSource, ShaderError, ShaderProgram, Stage};
pub use texture::{DecodedTexture, PixelLayout, TextureError};
