//! Face-culling surface extraction: face directions, the per-voxel visibility
//! mask, mesh buffers, cross-chunk neighbor lookup, and boundary invalidation.

pub mod chunk_mesh;
pub mod face_direction;
pub mod invalidation;
pub mod mesher;
pub mod neighborhood;
pub mod visible_faces;

pub use chunk_mesh::{ChunkMesh, FaceId, MeshVertex};
pub use face_direction::FaceDirection;
pub use invalidation::MeshInvalidator;
pub use mesher::extract_mesh;
pub use neighborhood::{ChunkNeighborhood, NeighborView};
pub use visible_faces::VisibleFaces;
