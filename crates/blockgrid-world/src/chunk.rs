//! A chunk as owned by the grid: block storage, placement, neighbor slots
//! and the last extracted mesh.

use blockgrid_mesh::ChunkMesh;
use blockgrid_voxel::{ChunkData, Side};
use glam::{IVec2, IVec3, Mat4, Vec3};

use crate::aabb::Aabb;

/// Index of a chunk inside its [`crate::ChunkGrid`].
///
/// Handles are only produced by the grid and stay valid for its whole
/// lifetime, since chunks are never added or removed after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkHandle(pub(crate) u32);

impl ChunkHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub struct Chunk {
    pub(crate) data: ChunkData,
    grid_pos: IVec2,
    local_to_world: Mat4,
    world_to_local: Mat4,
    bounds: Aabb,
    pub(crate) neighbors: [Option<ChunkHandle>; 4],
    mesh: ChunkMesh,
    mesh_revision: u64,
}

impl Chunk {
    pub(crate) fn new(data: ChunkData, grid_pos: IVec2, origin: Vec3) -> Self {
        let dims = data.dims();
        let local_to_world = Mat4::from_translation(origin);
        Self {
            bounds: Aabb::from_min_size(origin, dims.extent().as_vec3()),
            data,
            grid_pos,
            local_to_world,
            world_to_local: local_to_world.inverse(),
            neighbors: [None; 4],
            mesh: ChunkMesh::new(),
            mesh_revision: 0,
        }
    }

    pub fn data(&self) -> &ChunkData {
        &self.data
    }

    /// Position on the chunk lattice.
    pub fn grid_pos(&self) -> IVec2 {
        self.grid_pos
    }

    pub fn local_to_world(&self) -> Mat4 {
        self.local_to_world
    }

    pub fn world_to_local(&self) -> Mat4 {
        self.world_to_local
    }

    /// World-space box covering every voxel of the chunk.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn neighbor(&self, side: Side) -> Option<ChunkHandle> {
        self.neighbors[side.index()]
    }

    /// The current mesh, in chunk-local space.
    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Bumped every time the mesh is rebuilt.
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }

    /// Local voxel containing a world-space point. The result may lie
    /// outside the chunk.
    pub fn local_voxel_of(&self, world: Vec3) -> IVec3 {
        self.world_to_local.transform_point3(world).floor().as_ivec3()
    }

    /// World-space box of a single local voxel.
    pub fn voxel_bounds(&self, local: IVec3) -> Aabb {
        let min = self.local_to_world.transform_point3(local.as_vec3());
        Aabb::from_min_size(min, Vec3::ONE)
    }

    pub(crate) fn replace_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = mesh;
        self.mesh_revision += 1;
    }
}
