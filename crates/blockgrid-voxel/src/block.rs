//! Block identifiers stored inside every voxel cell.
//!
//! Id 0 is air so that freshly allocated chunk memory is empty space. Every
//! other value is an opaque material id; its meaning belongs to the renderer.

use serde::{Deserialize, Serialize};

/// Compact identifier stored in every voxel cell (1 byte).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct BlockId(pub u8);

impl BlockId {
    /// Empty space.
    pub const AIR: Self = Self(0);

    /// Returns `true` for air (id 0).
    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for any non-air id.
    #[inline]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }
}

impl From<u8> for BlockId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<BlockId> for u8 {
    fn from(block: BlockId) -> Self {
        block.0
    }
}
