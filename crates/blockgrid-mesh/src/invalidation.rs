//! Which neighbor meshes go stale after a voxel edit.

use blockgrid_voxel::{ChunkDims, Side};
use glam::IVec3;

/// Determines which chunk sides must be re-extracted after a voxel edit.
pub struct MeshInvalidator;

impl MeshInvalidator {
    /// Sides whose neighbor mesh depends on the voxel at `local`.
    ///
    /// A voxel on `x = 0`, `x = W - 1`, `z = 0` or `z = D - 1` is seen by the
    /// neighbor across that plane. A corner voxel touches two sides. The
    /// edited chunk itself is always stale and is not part of the result.
    pub fn boundary_sides(local: IVec3, dims: ChunkDims) -> Vec<Side> {
        let last = dims.extent() - IVec3::ONE;
        let mut sides = Vec::with_capacity(2);
        if local.z == last.z {
            sides.push(Side::Front);
        }
        if local.x == last.x {
            sides.push(Side::Right);
        }
        if local.z == 0 {
            sides.push(Side::Back);
        }
        if local.x == 0 {
            sides.push(Side::Left);
        }
        sides
    }
}
