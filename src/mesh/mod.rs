mod data;

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

pub use data::{BOX_VERTICES, CANDLE_VERTICES, CLOTH_VERTICES, DIE_VERTICES, TABLE_VERTICES};

pub const FLOATS_PER_POSITION: usize = 3;
pub const FLOATS_PER_NORMAL: usize = 3;
pub const FLOATS_PER_UV: usize = 2;
pub const FLOATS_PER_VERTEX: usize = FLOATS_PER_POSITION + FLOATS_PER_NORMAL + FLOATS_PER_UV;

/// Byte distance between consecutive vertices in a vertex buffer.
pub const VERTEX_STRIDE: u64 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("{len} floats do not divide into 8-float vertices")]
    RaggedVertexData { len: usize },
}

/// Interleaved vertex as laid out in the static arrays.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// The five meshes of the scene, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Table,
    Cloth,
    Die,
    Box,
    Candle,
}

impl MeshKind {
    pub const ALL: [MeshKind; 5] = [
        MeshKind::Table,
        MeshKind::Cloth,
        MeshKind::Die,
        MeshKind::Box,
        MeshKind::Candle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MeshKind::Table => "table",
            MeshKind::Cloth => "cloth",
            MeshKind::Die => "die",
            MeshKind::Box => "box",
            MeshKind::Candle => "candle",
        }
    }

    /// Flat float data for this mesh.
    pub fn vertices(self) -> &'static [f32] {
        match self {
            MeshKind::Table => &TABLE_VERTICES,
            MeshKind::Cloth => &CLOTH_VERTICES,
            MeshKind::Die => &DIE_VERTICES,
            MeshKind::Box => &BOX_VERTICES,
            MeshKind::Candle => &CANDLE_VERTICES,
        }
    }

    /// Vertex data ready for upload along with its draw count.
    pub fn mesh_data(self) -> Result<MeshData, MeshError> {
        let floats = self.vertices();
        let vertex_count = vertex_count(floats.len())?;
        Ok(MeshData {
            kind: self,
            vertices: bytemuck::cast_slice(floats),
            vertex_count,
        })
    }
}

/// CPU-side view of one mesh.
#[derive(Debug, Clone, Copy)]
pub struct MeshData {
    pub kind: MeshKind,
    pub vertices: &'static [Vertex],
    pub vertex_count: u32,
}

impl MeshData {
    pub fn as_bytes(&self) -> &'static [u8] {
        bytemuck::cast_slice(self.vertices)
    }
}

/// Number of vertices in `len` interleaved floats.
pub fn vertex_count(len: usize) -> Result<u32, MeshError> {
    if len % FLOATS_PER_VERTEX != 0 {
        return Err(MeshError::RaggedVertexData { len });
    }
    Ok((len / FLOATS_PER_VERTEX) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_counts_match_declared_arrays() {
        assert_eq!(vertex_count(TABLE_VERTICES.len()), Ok(36));
        assert_eq!(vertex_count(CLOTH_VERTICES.len()), Ok(6));
        assert_eq!(vertex_count(DIE_VERTICES.len()), Ok(12));
        assert_eq!(vertex_count(BOX_VERTICES.len()), Ok(36));
        assert_eq!(vertex_count(CANDLE_VERTICES.len()), Ok(75));
    }

    #[test]
    fn ragged_data_is_rejected() {
        assert_eq!(
            vertex_count(17),
            Err(MeshError::RaggedVertexData { len: 17 })
        );
        assert_eq!(vertex_count(0), Ok(0));
    }

    #[test]
    fn meshes_are_whole_triangles() {
        for kind in MeshKind::ALL {
            let mesh = kind.mesh_data().unwrap();
            assert_eq!(mesh.vertex_count % 3, 0, "{} is not a triangle list", kind.name());
            assert_eq!(mesh.vertices.len() as u32, mesh.vertex_count);
            assert_eq!(mesh.as_bytes().len() as u64, mesh.vertex_count as u64 * VERTEX_STRIDE);
        }
    }

    #[test]
    fn vertex_struct_matches_stride() {
        assert_eq!(std::mem::size_of::<Vertex>() as u64, VERTEX_STRIDE);
        let mesh = MeshKind::Cloth.mesh_data().unwrap();
        assert_eq!(mesh.vertices[0].position, [-2.0, 0.1001, 0.4]);
        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    }
}
