//! The chunk grid: chunk ownership, neighbor links, edit routing with mesh
//! re-extraction, and voxel raycasting across chunk boundaries.

mod aabb;
mod chunk;
mod error;
mod grid;
mod raycast;
mod updates;

pub use aabb::Aabb;
pub use chunk::{Chunk, ChunkHandle};
pub use error::GridError;
pub use grid::{ChunkGrid, GridSettings};
pub use raycast::{RaycastMode, VoxelRay, VoxelRaycastHit};
pub use updates::MeshUpdates;

pub use blockgrid_mesh::{ChunkMesh, MeshVertex};
pub use blockgrid_voxel::{BlockId, ChunkData, ChunkDims, ChunkDimsError, Side};
