//! The four horizontal neighbor slots of a chunk.

use glam::{IVec2, IVec3};

/// Horizontal side of a chunk. Chunks are never stacked vertically, so only
/// four sides can have a neighbor.
///
/// On the 2D chunk lattice `(gx, gy)`, grid `+gy` is `Front` and grid `+gx`
/// is `Right`. In chunk-local voxel space `Front` is `+z` and `Right` is `+x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front = 0,
    Right = 1,
    Back = 2,
    Left = 3,
}

impl Side {
    /// All sides in neighbor-slot order.
    pub const ALL: [Side; 4] = [Side::Front, Side::Right, Side::Back, Side::Left];

    /// Slot index in a `[_; 4]` neighbor array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opposite(self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Right => Side::Left,
            Side::Back => Side::Front,
            Side::Left => Side::Right,
        }
    }

    /// Offset to the neighboring cell on the chunk lattice.
    pub const fn grid_offset(self) -> IVec2 {
        match self {
            Side::Front => IVec2::new(0, 1),
            Side::Right => IVec2::new(1, 0),
            Side::Back => IVec2::new(0, -1),
            Side::Left => IVec2::new(-1, 0),
        }
    }

    /// One-voxel step across this side in chunk-local space.
    pub const fn local_step(self) -> IVec3 {
        match self {
            Side::Front => IVec3::new(0, 0, 1),
            Side::Right => IVec3::new(1, 0, 0),
            Side::Back => IVec3::new(0, 0, -1),
            Side::Left => IVec3::new(-1, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            assert_ne!(side.opposite(), side);
            assert_eq!(side.grid_offset() + side.opposite().grid_offset(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_index_matches_slot_order() {
        for (i, side) in Side::ALL.iter().enumerate() {
            assert_eq!(side.index(), i);
        }
    }

    #[test]
    fn test_local_step_matches_grid_offset() {
        for side in Side::ALL {
            let g = side.grid_offset();
            assert_eq!(side.local_step(), IVec3::new(g.x, 0, g.y));
        }
    }
}
