//! Cross-chunk voxel lookup for face culling.
//!
//! A [`ChunkNeighborhood`] borrows the chunk being meshed plus up to four
//! horizontal neighbors. A lookup that leaves the center chunk through one of
//! its four sides is carried into the neighbor's voxel space through world
//! space: the would-be voxel center goes through the center chunk's
//! local-to-world transform and then through the neighbor's world-to-local
//! transform. Anything that cannot be resolved reads as air.

use blockgrid_voxel::{BlockId, ChunkData, Side};
use glam::{IVec3, Mat4, Vec3};

/// A neighbor chunk together with the transform into its voxel space.
#[derive(Clone, Copy, Debug)]
pub struct NeighborView<'a> {
    pub data: &'a ChunkData,
    pub world_to_local: Mat4,
}

/// Read-only view of a chunk and its horizontal neighbors.
#[derive(Clone, Copy, Debug)]
pub struct ChunkNeighborhood<'a> {
    center: &'a ChunkData,
    local_to_world: Mat4,
    sides: [Option<NeighborView<'a>>; 4],
}

impl<'a> ChunkNeighborhood<'a> {
    pub fn new(center: &'a ChunkData, local_to_world: Mat4) -> Self {
        Self {
            center,
            local_to_world,
            sides: [None; 4],
        }
    }

    /// A chunk with no neighbors at all; every boundary face is exposed.
    pub fn isolated(center: &'a ChunkData) -> Self {
        Self::new(center, Mat4::IDENTITY)
    }

    /// Attaches the neighbor on `side`.
    pub fn with_neighbor(mut self, side: Side, data: &'a ChunkData, world_to_local: Mat4) -> Self {
        self.sides[side.index()] = Some(NeighborView {
            data,
            world_to_local,
        });
        self
    }

    pub fn center(&self) -> &'a ChunkData {
        self.center
    }

    pub fn neighbor(&self, side: Side) -> Option<&NeighborView<'a>> {
        self.sides[side.index()].as_ref()
    }

    /// Looks up a voxel in center-chunk coordinates, which may lie just
    /// outside the center chunk.
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockId {
        if self.center.contains(x, y, z) {
            return self.center.get(x, y, z);
        }
        let dims = self.center.dims();
        if y < 0 || y >= dims.height() as i32 {
            return BlockId::AIR;
        }

        let outside_x = x < 0 || x >= dims.width() as i32;
        let outside_z = z < 0 || z >= dims.depth() as i32;
        let side = match (outside_x, outside_z) {
            (true, false) if x < 0 => Side::Left,
            (true, false) => Side::Right,
            (false, true) if z < 0 => Side::Back,
            (false, true) => Side::Front,
            // Diagonal neighbors are never linked.
            _ => return BlockId::AIR,
        };

        let Some(view) = self.neighbor(side) else {
            return BlockId::AIR;
        };
        let voxel_center = Vec3::new(x as f32, y as f32, z as f32) + Vec3::splat(0.5);
        let world = self.local_to_world.transform_point3(voxel_center);
        let local: IVec3 = view.world_to_local.transform_point3(world).floor().as_ivec3();
        view.data.get_at(local)
    }
}
