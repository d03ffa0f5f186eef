//! Per-voxel mask of the faces that border air.

use crate::face_direction::FaceDirection;

/// Bitmask of exposed faces, one bit per [`FaceDirection`] discriminant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleFaces(pub u8);

impl VisibleFaces {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b0011_1111);

    /// Builds the mask by asking `is_exposed` once per direction.
    pub fn from_fn(mut is_exposed: impl FnMut(FaceDirection) -> bool) -> Self {
        let mut mask = Self::NONE;
        for dir in FaceDirection::ALL {
            if is_exposed(dir) {
                mask.insert(dir);
            }
        }
        mask
    }

    pub fn contains(self, direction: FaceDirection) -> bool {
        self.0 & (1 << direction as u8) != 0
    }

    pub fn insert(&mut self, direction: FaceDirection) {
        self.0 |= 1 << direction as u8;
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Exposed directions in [`FaceDirection::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = FaceDirection> {
        FaceDirection::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_collects_directions() {
        let mask = VisibleFaces::from_fn(|d| d.face_id() == 0);
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(FaceDirection::PosY));
        assert!(mask.contains(FaceDirection::NegY));
        assert!(!mask.contains(FaceDirection::PosX));
    }

    #[test]
    fn test_all_and_none() {
        assert_eq!(VisibleFaces::from_fn(|_| true), VisibleFaces::ALL);
        assert!(VisibleFaces::from_fn(|_| false).is_empty());
        assert_eq!(VisibleFaces::ALL.iter().count(), 6);
    }

    #[test]
    fn test_iter_preserves_order() {
        let mut mask = VisibleFaces::NONE;
        mask.insert(FaceDirection::NegZ);
        mask.insert(FaceDirection::PosX);
        let dirs: Vec<_> = mask.iter().collect();
        assert_eq!(dirs, vec![FaceDirection::PosX, FaceDirection::NegZ]);
    }
}
