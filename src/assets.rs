use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::mesh::{MeshData, MeshKind};
use crate::scene::RenderableObject;
use crate::shader::{ProgramSource, ShaderProgram};
use crate::texture::DecodedTexture;

/// Everything prepared on the CPU before a window or GPU device exists.
#[derive(Debug)]
pub struct SceneAssets {
    /// One linked program per object, in draw order.
    pub programs: Vec<ShaderProgram>,
    pub lamp_program: ShaderProgram,
    /// One texture per object, in draw order.
    pub textures: Vec<DecodedTexture>,
    /// Indexed like [`MeshKind::ALL`].
    pub meshes: Vec<MeshData>,
}

impl SceneAssets {
    /// Links the shader programs, then decodes each object's texture from `dir`.
    pub fn load(dir: impl AsRef<Path>, objects: &[RenderableObject]) -> Result<Self> {
        let dir = dir.as_ref();

        let mut programs = Vec::with_capacity(objects.len());
        for object in objects {
            let source = ProgramSource::phong(object.label(), &object.material);
            let program = ShaderProgram::build(&source)
                .with_context(|| format!("failed to build {} shader program", object.label()))?;
            programs.push(program);
        }
        let lamp_program =
            ShaderProgram::build(&ProgramSource::lamp()).context("failed to build lamp shader program")?;
        info!("linked {} shader programs", programs.len() + 1);

        let mut textures = Vec::with_capacity(objects.len());
        for object in objects {
            let texture = DecodedTexture::load(dir.join(object.texture))
                .with_context(|| format!("failed to load texture {}", object.texture))?;
            info!(
                "decoded {} ({}x{}, {} mip levels)",
                texture.name,
                texture.width(),
                texture.height(),
                texture.mip_level_count()
            );
            textures.push(texture);
        }

        let meshes = MeshKind::ALL
            .iter()
            .map(|kind| {
                kind.mesh_data()
                    .with_context(|| format!("invalid vertex data for {}", kind.name()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            programs,
            lamp_program,
            textures,
            meshes,
        })
    }

    pub fn mesh(&self, kind: MeshKind) -> Option<&MeshData> {
        self.meshes.iter().find(|mesh| mesh.kind == kind)
    }
}
