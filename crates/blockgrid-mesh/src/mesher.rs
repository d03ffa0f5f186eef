//! Value-based face culling.
//!
//! A face of a solid voxel is emitted iff the voxel across it is air. Faces
//! on the chunk boundary are resolved through the [`ChunkNeighborhood`], so a
//! missing neighbor leaves the boundary open.

use blockgrid_voxel::BlockId;
use glam::IVec3;

use crate::chunk_mesh::ChunkMesh;
use crate::neighborhood::ChunkNeighborhood;
use crate::visible_faces::VisibleFaces;

/// Exposed-face mask of the voxel at `pos`. Air voxels expose nothing.
fn exposed_faces(hood: &ChunkNeighborhood, pos: IVec3) -> VisibleFaces {
    if hood.center().get_at(pos).is_air() {
        return VisibleFaces::NONE;
    }
    VisibleFaces::from_fn(|dir| {
        let (nx, ny, nz) = dir.offset(pos.x, pos.y, pos.z);
        hood.get(nx, ny, nz).is_air()
    })
}

/// Builds the full mesh of the center chunk.
///
/// Voxels are visited with x outermost and z innermost, which fixes the
/// order faces appear in the vertex buffer.
pub fn extract_mesh(hood: &ChunkNeighborhood) -> ChunkMesh {
    let chunk = hood.center();
    let extent = chunk.dims().extent();
    let mut mesh = ChunkMesh::new();

    for x in 0..extent.x {
        for y in 0..extent.y {
            for z in 0..extent.z {
                let pos = IVec3::new(x, y, z);
                let faces = exposed_faces(hood, pos);
                if faces.is_empty() {
                    continue;
                }
                let block = chunk.get_at(pos);
                let above: BlockId = chunk.get(x, y + 1, z);
                let below: BlockId = chunk.get(x, y - 1, z);
                for dir in faces.iter() {
                    mesh.push_face(pos, dir, block, above, below);
                }
            }
        }
    }

    mesh
}
