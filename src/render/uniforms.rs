use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::scene::{FrameParams, SceneConfig};

/// Lighting inputs shared by every lit object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub object_color: Vec3,
    pub light_color: Vec3,
    pub light_position: Vec3,
    pub uv_scale: Vec2,
}

impl From<&SceneConfig> for Lighting {
    fn from(config: &SceneConfig) -> Self {
        Self {
            object_color: config.object_color,
            light_color: config.light_color,
            light_position: config.light_position,
            uv_scale: config.uv_scale,
        }
    }
}

/// Matches `ObjectUniforms` in the phong shaders.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub light_color: [f32; 4],
    pub light_position: [f32; 4],
    pub view_position: [f32; 4],
    pub uv_scale: [f32; 4],
}

impl ObjectUniforms {
    pub fn new(model: Mat4, frame: &FrameParams, lighting: &Lighting) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix(model).to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            projection: frame.projection.to_cols_array_2d(),
            object_color: lighting.object_color.extend(1.0).into(),
            light_color: lighting.light_color.extend(1.0).into(),
            light_position: lighting.light_position.extend(1.0).into(),
            view_position: frame.view_position.extend(1.0).into(),
            uv_scale: [lighting.uv_scale.x, lighting.uv_scale.y, 0.0, 0.0],
        }
    }
}

/// Matches `LampUniforms` in the lamp shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LampUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl LampUniforms {
    pub fn new(model: Mat4, frame: &FrameParams) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            projection: frame.projection.to_cols_array_2d(),
        }
    }
}

/// Inverse-transpose of the model matrix, for transforming normals.
pub fn normal_matrix(model: Mat4) -> Mat4 {
    model.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameParams {
        FrameParams {
            view: Mat4::look_at_rh(Vec3::new(0.0, 1.0, 3.5), Vec3::new(0.0, 1.0, 2.5), Vec3::Y),
            projection: Mat4::perspective_rh(45f32.to_radians(), 1.5, 0.1, 100.0),
            view_position: Vec3::new(0.0, 1.0, 3.5),
        }
    }

    #[test]
    fn uniform_sizes_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 4 * 64 + 5 * 16);
        assert_eq!(std::mem::size_of::<LampUniforms>(), 3 * 64);
        assert_eq!(std::mem::size_of::<ObjectUniforms>() % 16, 0);
    }

    #[test]
    fn uniform_scale_keeps_normal_direction() {
        let model = SceneConfig::default().object_model();
        let normal = normal_matrix(model).transform_vector3(Vec3::Y).normalize();
        assert!(normal.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn non_uniform_scale_tilts_normals_correctly() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let normal = normal_matrix(model)
            .transform_vector3(Vec3::new(1.0, 1.0, 0.0))
            .normalize();
        let expected = Vec3::new(0.5, 1.0, 0.0).normalize();
        assert!(normal.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn object_uniforms_pack_scene_values() {
        let config = SceneConfig::default();
        let uniforms = ObjectUniforms::new(config.object_model(), &frame(), &Lighting::from(&config));
        assert_eq!(uniforms.light_position, [0.0, 0.9, 0.0, 1.0]);
        assert_eq!(uniforms.view_position, [0.0, 1.0, 3.5, 1.0]);
        assert_eq!(uniforms.uv_scale, [5.0, 5.0, 0.0, 0.0]);
        assert_eq!(uniforms.object_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(uniforms.model[0][0], 0.4);
    }

    #[test]
    fn lamp_uniforms_use_lamp_model() {
        let config = SceneConfig::default();
        let uniforms = LampUniforms::new(config.lamp_model(), &frame());
        assert_eq!(uniforms.model[3], [0.0, 0.9, 0.0, 1.0]);
        assert_eq!(uniforms.view, frame().view.to_cols_array_2d());
    }
}
