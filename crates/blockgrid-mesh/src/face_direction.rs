//! The six axis-aligned directions a voxel face can point.

use blockgrid_voxel::Side;
use glam::{IVec3, Vec3};

/// One of the six cardinal directions a voxel face can point.
///
/// The `repr(u8)` discriminant doubles as the bit index inside [`super::VisibleFaces`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceDirection {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl FaceDirection {
    /// All six directions in order.
    pub const ALL: [FaceDirection; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Axis index perpendicular to the face (0 = X, 1 = Y, 2 = Z).
    pub const fn axis(self) -> usize {
        match self {
            Self::PosX | Self::NegX => 0,
            Self::PosY | Self::NegY => 1,
            Self::PosZ | Self::NegZ => 2,
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PosX | Self::PosY | Self::PosZ)
    }

    /// Integer step to the voxel on the other side of this face.
    pub const fn step(self) -> IVec3 {
        match self {
            Self::PosX => IVec3::X,
            Self::NegX => IVec3::NEG_X,
            Self::PosY => IVec3::Y,
            Self::NegY => IVec3::NEG_Y,
            Self::PosZ => IVec3::Z,
            Self::NegZ => IVec3::NEG_Z,
        }
    }

    /// Outward unit normal.
    pub fn normal(self) -> [f32; 3] {
        self.step().as_vec3().to_array()
    }

    /// Neighbor coordinate across this face.
    pub fn offset(self, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
        let n = IVec3::new(x, y, z) + self.step();
        (n.x, n.y, n.z)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tag consumed by the renderer to pick an atlas row: 0 for the top and
    /// bottom faces, 1 for the four side faces.
    pub const fn face_id(self) -> u8 {
        match self {
            Self::PosY | Self::NegY => 0,
            _ => 1,
        }
    }

    /// The chunk side this face crosses when it sits on the chunk boundary.
    /// Vertical faces never cross into another chunk.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::PosX => Some(Side::Right),
            Self::NegX => Some(Side::Left),
            Self::PosZ => Some(Side::Front),
            Self::NegZ => Some(Side::Back),
            Self::PosY | Self::NegY => None,
        }
    }

    /// The four corners of this face on the unit cube at the origin, in
    /// counter-clockwise order seen from outside the cube.
    pub fn corners(self) -> [Vec3; 4] {
        // (u, v) span the face plane with u x v = +axis.
        let (u, v) = match self.axis() {
            0 => (Vec3::Y, Vec3::Z),
            1 => (Vec3::Z, Vec3::X),
            _ => (Vec3::X, Vec3::Y),
        };
        let base = if self.is_positive() {
            self.step().as_vec3()
        } else {
            Vec3::ZERO
        };
        let quad = [base, base + u, base + u + v, base + v];
        if self.is_positive() {
            quad
        } else {
            // Swap the tangents so the loop stays counter-clockwise when
            // viewed along the negative axis.
            [quad[0], quad[3], quad[2], quad[1]]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions_unique() {
        for (i, a) in FaceDirection::ALL.iter().enumerate() {
            for (j, b) in FaceDirection::ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_offset_pos_x() {
        assert_eq!(FaceDirection::PosX.offset(5, 10, 15), (6, 10, 15));
        assert_eq!(FaceDirection::NegZ.offset(5, 10, 15), (5, 10, 14));
    }

    #[test]
    fn test_opposite_normals_cancel() {
        for dir in FaceDirection::ALL {
            let a = Vec3::from(dir.normal());
            let b = Vec3::from(dir.opposite().normal());
            assert_eq!(a + b, Vec3::ZERO);
        }
    }

    #[test]
    fn test_face_id_splits_horizontal_and_side() {
        assert_eq!(FaceDirection::PosY.face_id(), 0);
        assert_eq!(FaceDirection::NegY.face_id(), 0);
        for dir in [
            FaceDirection::PosX,
            FaceDirection::NegX,
            FaceDirection::PosZ,
            FaceDirection::NegZ,
        ] {
            assert_eq!(dir.face_id(), 1);
        }
    }

    #[test]
    fn test_side_agrees_with_local_step() {
        for dir in FaceDirection::ALL {
            match dir.side() {
                Some(side) => assert_eq!(side.local_step(), dir.step()),
                None => assert_eq!(dir.axis(), 1),
            }
        }
    }

    #[test]
    fn test_corners_lie_on_face_plane() {
        for dir in FaceDirection::ALL {
            let plane = if dir.is_positive() { 1.0 } else { 0.0 };
            for c in dir.corners() {
                assert_eq!(c[dir.axis()], plane, "{dir:?}");
            }
        }
    }

    #[test]
    fn test_corners_wind_outward() {
        for dir in FaceDirection::ALL {
            let [a, b, c, d] = dir.corners();
            let n = Vec3::from(dir.normal());
            assert!((b - a).cross(c - a).dot(n) > 0.0, "{dir:?} first triangle");
            assert!((c - a).cross(d - a).dot(n) > 0.0, "{dir:?} second triangle");
        }
    }
}
