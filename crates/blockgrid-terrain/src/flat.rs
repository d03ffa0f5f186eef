use blockgrid_voxel::BlockId;

use crate::TerrainGenerator;

/// A flat slab of `block` from `y = 0` up to (not including) `height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatTerrain {
    pub height: usize,
    pub block: BlockId,
}

impl FlatTerrain {
    pub const fn new(height: usize, block: BlockId) -> Self {
        Self { height, block }
    }

    /// No blocks at all.
    pub const fn empty() -> Self {
        Self::new(0, BlockId::AIR)
    }
}

impl TerrainGenerator for FlatTerrain {
    fn fill_column(&self, _world_x: f32, _world_z: f32, column: &mut [BlockId]) {
        let top = self.height.min(column.len());
        column[..top].fill(self.block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_is_clamped_to_column() {
        let mut column = [BlockId::AIR; 4];
        FlatTerrain::new(10, BlockId(2)).fill_column(0.0, 0.0, &mut column);
        assert_eq!(column, [BlockId(2); 4]);

        let mut column = [BlockId::AIR; 4];
        FlatTerrain::new(1, BlockId(2)).fill_column(0.0, 0.0, &mut column);
        assert_eq!(column, [BlockId(2), BlockId::AIR, BlockId::AIR, BlockId::AIR]);
    }

    #[test]
    fn test_empty_leaves_air() {
        let mut column = [BlockId::AIR; 4];
        FlatTerrain::empty().fill_column(3.0, 3.0, &mut column);
        assert!(column.iter().all(|b| b.is_air()));
    }
}
