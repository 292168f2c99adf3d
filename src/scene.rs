use glam::{Mat4, Vec2, Vec3};
use log::info;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::camera::Camera;
use crate::input::{action_for_key, InputState, KeyAction};
use crate::mesh::MeshKind;
use crate::shader::PhongMaterial;

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 756,
            title: "Tabletop Scene".to_string(),
        }
    }
}

/// Fixed parameters of the tabletop scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub camera_start: Vec3,
    pub light_position: Vec3,
    pub light_scale: f32,
    pub light_color: Vec3,
    pub object_color: Vec3,
    pub uv_scale: Vec2,
    pub clear_color: Vec3,
    pub object_translation: Vec3,
    pub object_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_start: Vec3::new(0.0, 1.0, 3.5),
            light_position: Vec3::new(0.0, 0.9, 0.0),
            light_scale: 0.001,
            light_color: Vec3::ONE,
            object_color: Vec3::ONE,
            uv_scale: Vec2::new(5.0, 5.0),
            clear_color: Vec3::new(0.95, 0.82, 0.46),
            object_translation: Vec3::ZERO,
            object_scale: 0.4,
        }
    }
}

impl SceneConfig {
    /// Model matrix shared by every object on the table.
    pub fn object_model(&self) -> Mat4 {
        Mat4::from_translation(self.object_translation) * Mat4::from_scale(Vec3::splat(self.object_scale))
    }

    /// Model matrix of the light indicator.
    pub fn lamp_model(&self) -> Mat4 {
        Mat4::from_translation(self.light_position) * Mat4::from_scale(Vec3::splat(self.light_scale))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 100.0;

    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    /// Projection for a vertical field of view in degrees and a width/height aspect.
    pub fn matrix(self, fov_degrees: f32, aspect: f32) -> Mat4 {
        match self {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                fov_degrees.to_radians(),
                aspect.max(f32::EPSILON),
                Self::NEAR,
                Self::FAR,
            ),
            ProjectionMode::Orthographic => Mat4::orthographic_rh(-2.0, 2.0, -2.0, 2.0, 0.0, 5.0),
        }
    }
}

/// One textured, lit object and everything needed to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableObject {
    pub mesh: MeshKind,
    pub texture: &'static str,
    pub material: PhongMaterial,
    pub model: Mat4,
}

impl RenderableObject {
    pub fn label(&self) -> &'static str {
        self.mesh.name()
    }
}

/// The five objects of the scene in draw order.
pub fn scene_objects(config: &SceneConfig) -> Vec<RenderableObject> {
    let model = config.object_model();
    let object = |mesh, texture, ambient, specular| RenderableObject {
        mesh,
        texture,
        material: PhongMaterial::new(ambient, specular),
        model,
    };
    vec![
        object(MeshKind::Table, "wood.jpg", 0.2, 0.8),
        object(MeshKind::Cloth, "fabric.jpg", 0.2, 0.1),
        object(MeshKind::Die, "dice.jpg", 0.2, 0.8),
        object(MeshKind::Box, "box.jpg", 0.8, 0.8),
        object(MeshKind::Candle, "candle.jpg", 0.8, 0.8),
    ]
}

/// Per-frame matrices derived from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_position: Vec3,
}

/// Mutable state driven by input between frames.
#[derive(Debug)]
pub struct SceneState {
    pub camera: Camera,
    pub projection: ProjectionMode,
    pub config: SceneConfig,
    pub input: InputState,
}

impl SceneState {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            camera: Camera::new(config.camera_start),
            projection: ProjectionMode::default(),
            config,
            input: InputState::new(),
        }
    }

    /// Applies a key transition. Returns `true` when the key asks to quit.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) -> bool {
        if state == ElementState::Released {
            self.input.set_key_up(key);
            return false;
        }
        match action_for_key(key) {
            Some(KeyAction::Exit) => return true,
            Some(KeyAction::ToggleProjection) if !repeat => {
                self.projection = self.projection.toggled();
                info!("projection switched to {:?}", self.projection);
            }
            Some(KeyAction::Move(_)) => self.input.set_key_down(key),
            _ => {}
        }
        false
    }

    /// Advances the camera by the input gathered since the last frame.
    pub fn update(&mut self, delta_time: f32) {
        let held: Vec<_> = self.input.held_movements().collect();
        for direction in held {
            self.camera.process_keyboard(direction, delta_time);
        }

        let delta = self.input.take_mouse_delta();
        if delta != Vec2::ZERO {
            self.camera.process_mouse_movement(delta.x, -delta.y);
        }

        let scroll = self.input.take_scroll();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }
    }

    pub fn frame(&self, aspect: f32) -> FrameParams {
        FrameParams {
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(self.camera.zoom(), aspect),
            view_position: self.camera.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_are_listed_in_draw_order() {
        let objects = scene_objects(&SceneConfig::default());
        let labels: Vec<_> = objects.iter().map(RenderableObject::label).collect();
        assert_eq!(labels, vec!["table", "cloth", "die", "box", "candle"]);
        let textures: Vec<_> = objects.iter().map(|o| o.texture).collect();
        assert_eq!(
            textures,
            vec!["wood.jpg", "fabric.jpg", "dice.jpg", "box.jpg", "candle.jpg"]
        );
        assert_eq!(objects[1].material, PhongMaterial::new(0.2, 0.1));
        assert_eq!(objects[4].material.highlight_size, 16.0);
    }

    #[test]
    fn shared_model_scales_about_origin() {
        let model = SceneConfig::default().object_model();
        let corner = model.transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert!(corner.abs_diff_eq(Vec3::splat(0.4), 1e-6));
    }

    #[test]
    fn lamp_sits_at_light_position() {
        let config = SceneConfig::default();
        let centre = config.lamp_model().transform_point3(Vec3::ZERO);
        assert!(centre.abs_diff_eq(config.light_position, 1e-6));
        let edge = config.lamp_model().transform_point3(Vec3::X);
        assert!((edge.x - 0.001).abs() < 1e-6);
    }

    #[test]
    fn projection_toggles_back_and_forth() {
        let mode = ProjectionMode::default();
        assert_eq!(mode, ProjectionMode::Perspective);
        assert_eq!(mode.toggled(), ProjectionMode::Orthographic);
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn orthographic_ignores_fov_and_aspect() {
        let a = ProjectionMode::Orthographic.matrix(45.0, 1.0);
        let b = ProjectionMode::Orthographic.matrix(10.0, 2.5);
        assert_eq!(a, b);
        assert_ne!(
            ProjectionMode::Perspective.matrix(45.0, 1.0),
            ProjectionMode::Perspective.matrix(30.0, 1.0)
        );
    }

    #[test]
    fn toggle_key_ignores_repeats() {
        let mut state = SceneState::new(SceneConfig::default());
        assert!(!state.handle_key(KeyCode::KeyK, ElementState::Pressed, false));
        assert_eq!(state.projection, ProjectionMode::Orthographic);
        state.handle_key(KeyCode::KeyK, ElementState::Pressed, true);
        assert_eq!(state.projection, ProjectionMode::Orthographic);
        state.handle_key(KeyCode::KeyK, ElementState::Released, false);
        state.handle_key(KeyCode::KeyK, ElementState::Pressed, false);
        assert_eq!(state.projection, ProjectionMode::Perspective);
    }

    #[test]
    fn escape_requests_exit() {
        let mut state = SceneState::new(SceneConfig::default());
        assert!(state.handle_key(KeyCode::Escape, ElementState::Pressed, false));
        assert!(!state.handle_key(KeyCode::Escape, ElementState::Released, false));
    }

    #[test]
    fn held_keys_move_camera_each_update() {
        let mut state = SceneState::new(SceneConfig::default());
        let start = state.camera.position();
        state.handle_key(KeyCode::KeyW, ElementState::Pressed, false);
        state.update(0.5);
        state.update(0.5);
        assert!(state
            .camera
            .position()
            .abs_diff_eq(start + Vec3::new(0.0, 0.0, -2.5), 1e-4));

        state.handle_key(KeyCode::KeyW, ElementState::Released, false);
        state.update(1.0);
        assert!(state
            .camera
            .position()
            .abs_diff_eq(start + Vec3::new(0.0, 0.0, -2.5), 1e-4));
    }

    #[test]
    fn mouse_motion_up_the_screen_raises_pitch() {
        let mut state = SceneState::new(SceneConfig::default());
        state.input.add_mouse_motion(0.0, -50.0);
        state.update(0.016);
        assert!((state.camera.pitch() - 5.0).abs() < 1e-4);

        state.input.add_scroll(winit::event::MouseScrollDelta::LineDelta(0.0, 5.0));
        state.update(0.016);
        assert_eq!(state.camera.zoom(), 40.0);
    }

    #[test]
    fn frame_uses_camera_position() {
        let state = SceneState::new(SceneConfig::default());
        let frame = state.frame(1024.0 / 756.0);
        assert_eq!(frame.view_position, Vec3::new(0.0, 1.0, 3.5));
        assert_eq!(frame.view, state.camera.view_matrix());
    }
}
