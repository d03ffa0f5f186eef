use blockgrid_voxel::ChunkDimsError;

/// Errors from building a [`crate::ChunkGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("chunk range must be at least 1")]
    ZeroRange,
    #[error("chunk range {0} exceeds the maximum of {max}", max = crate::grid::MAX_RANGE)]
    RangeTooLarge(u32),
    #[error("invalid chunk dimensions: {0}")]
    Dims(#[from] ChunkDimsError),
}
