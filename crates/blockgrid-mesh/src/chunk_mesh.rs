//! Mesh buffers produced by surface extraction.
//!
//! Faces are never merged and vertices are never shared: every exposed face
//! appends six fresh vertices (two triangles) and six sequential indices. The
//! renderer and the collider both consume this buffer as-is.

use blockgrid_voxel::BlockId;
use glam::{IVec3, Vec3};

use crate::face_direction::FaceDirection;

/// Atlas row selector carried by every vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceId {
    /// Top or bottom face.
    Horizontal = 0,
    /// One of the four side faces.
    Side = 1,
}

impl From<FaceDirection> for FaceId {
    fn from(direction: FaceDirection) -> Self {
        match direction.face_id() {
            0 => FaceId::Horizontal,
            _ => FaceId::Side,
        }
    }
}

/// A single mesh vertex, laid out for direct upload (36 bytes).
///
/// `block_above` and `block_below` are the ids of the voxels directly above
/// and below the source voxel. They are opaque here and only used by the
/// renderer's shading.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Position in chunk-local voxel space.
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// [`FaceId`] as a byte.
    pub face_id: u8,
    pub block: u8,
    pub block_above: u8,
    pub block_below: u8,
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 36]);

const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Corner order of the two triangles of a face.
const FACE_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Vertices emitted per face.
pub const VERTICES_PER_FACE: usize = 6;

/// The output of one extraction pass over a chunk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
    pub vertices: Vec<MeshVertex>,
    /// Flat triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one face of the voxel at `voxel`.
    pub fn push_face(
        &mut self,
        voxel: IVec3,
        direction: FaceDirection,
        block: BlockId,
        above: BlockId,
        below: BlockId,
    ) {
        let origin = voxel.as_vec3();
        let corners = direction.corners();
        let normal = direction.normal();
        let face_id = FaceId::from(direction) as u8;

        for corner in FACE_TRIANGLES {
            let index = self.vertices.len() as u32;
            self.vertices.push(MeshVertex {
                position: (origin + corners[corner]).to_array(),
                normal,
                uv: QUAD_UVS[corner],
                face_id,
                block: block.0,
                block_above: above.0,
                block_below: below.0,
            });
            self.indices.push(index);
        }
    }

    /// Number of faces (quads) in the mesh.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_FACE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of faces pointing in `direction`.
    pub fn count_faces_for_direction(&self, direction: FaceDirection) -> usize {
        let normal = direction.normal();
        self.vertices
            .iter()
            .step_by(VERTICES_PER_FACE)
            .filter(|v| v.normal == normal)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex buffer as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Local-space bounds `(min, max)` of all vertices, `None` when empty.
    pub fn local_bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}
