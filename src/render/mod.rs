mod native;
mod uniforms;

pub use native::Renderer;
pub use uniforms::{normal_matrix, LampUniforms, Lighting, ObjectUniforms};
