use glam::Vec3;

/// Axis-aligned bounding box in world space.
///
/// Invariant: `min <= max` on every axis. The constructor enforces this by
/// swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from two corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    pub fn from_min_size(min: Vec3, size: Vec3) -> Self {
        Self::new(min, min + size)
    }

    /// Returns true if the boxes overlap, including touching faces.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Returns true if the interiors overlap. Boxes that only touch do not.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.max).all() && self.max.cmpgt(other.min).all()
    }

    /// Smallest AABB enclosing both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_corners() {
        let b = Aabb::new(Vec3::new(3.0, -1.0, 2.0), Vec3::new(-3.0, 1.0, 0.0));
        assert_eq!(b.min, Vec3::new(-3.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(b.center(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(b.size(), Vec3::new(6.0, 2.0, 2.0));
    }

    #[test]
    fn test_touching_boxes_intersect_but_do_not_overlap() {
        let a = Aabb::from_min_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_min_size(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b));
        assert!(!a.overlaps(&b));

        let c = Aabb::from_center_half_extents(Vec3::splat(1.0), Vec3::splat(0.25));
        assert!(a.overlaps(&c));
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = Aabb::from_min_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_min_size(Vec3::splat(5.0), Vec3::ONE);
        assert!(!a.intersects(&b));
        assert_eq!(a.union(&b), Aabb::new(Vec3::ZERO, Vec3::splat(6.0)));
    }
}
