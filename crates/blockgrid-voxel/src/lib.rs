//! Dense block storage for fixed-size chunks, block identifiers, and the
//! horizontal neighbor sides shared by the mesher and the grid.

pub mod block;
pub mod chunk;
pub mod side;

pub use block::BlockId;
pub use chunk::{ChunkData, ChunkDims, ChunkDimsError, MAX_CHUNK_EXTENT};
pub use side::Side;
