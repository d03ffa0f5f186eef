//! Voxel raycasting using the DDA (Amanatides & Woo) algorithm.
//!
//! The ray is treated as the segment `origin .. origin + direction * max_distance`
//! and parameterised by `t` in `[0, 1]`. Each axis tracks the `t` of its next
//! voxel boundary; the walk always crosses the nearest boundary first and
//! stops once every axis' next boundary lies beyond the segment end.

use blockgrid_voxel::BlockId;
use glam::{IVec3, Vec3};

use crate::chunk::ChunkHandle;

/// Per-axis step size for an axis the ray does not move along. Large enough
/// that such an axis never wins a boundary crossing.
const NO_CROSSING: f32 = 10_000_000.0;

/// How [`crate::ChunkGrid::raycast`] searches across chunks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RaycastMode {
    /// Walk the chunk containing the origin, then its `+x`, `-x`, `-y` and
    /// `+y` lattice neighbors, and report the first hit. A ray that reaches a
    /// chunk outside this fan is not found.
    #[default]
    NeighborFan,
    /// A single walk across the whole grid, crossing any number of chunks.
    Continuous,
}

/// A world-space ray limited to `max_distance`. Rays with a non-finite
/// origin or end never hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelRay {
    pub origin: Vec3,
    /// Unit direction, or zero for a degenerate ray.
    pub direction: Vec3,
    pub max_distance: f32,
}

impl VoxelRay {
    /// Builds a ray, normalising `direction`.
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            max_distance: max_distance.max(0.0),
        }
    }

    /// Far end of the segment.
    pub fn end(&self) -> Vec3 {
        self.origin + self.direction * self.max_distance
    }
}

/// Result of a successful voxel raycast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelRaycastHit {
    pub chunk: ChunkHandle,
    /// Local coordinate of the hit voxel inside `chunk`.
    pub voxel: IVec3,
    /// Outward normal of the face the ray entered through. Zero when the ray
    /// started inside the hit voxel.
    pub face_normal: IVec3,
    /// Distance from the ray origin to the entry point.
    pub distance: f32,
    pub block: BlockId,
}

/// Outcome of [`march`]: what the probe returned, the entry normal and the
/// segment parameter at which the voxel was entered.
pub(crate) struct MarchHit<T> {
    pub value: T,
    pub face_normal: IVec3,
    pub t: f32,
}

struct Axis {
    step: i32,
    t_delta: f32,
    t_max: f32,
}

impl Axis {
    fn new(start: f32, end: f32) -> Self {
        let d = end - start;
        if d.abs() < f32::EPSILON {
            return Self {
                step: 0,
                t_delta: NO_CROSSING,
                t_max: NO_CROSSING,
            };
        }
        let step = if d > 0.0 { 1 } else { -1 };
        let t_delta = (1.0 / d.abs()).min(NO_CROSSING);
        let frac = start - start.floor();
        let t_max = if step > 0 {
            t_delta * (1.0 - frac)
        } else {
            t_delta * frac
        };
        Self {
            step,
            t_delta,
            t_max,
        }
    }
}

/// Walks every unit voxel the part of `start .. end` inside the box
/// `[lo, hi]` passes through, in order, and returns the first one for which
/// `probe` yields a value. The returned `t` is measured along the whole
/// segment.
///
/// `start` and `end` are in a space where voxel `v` covers `[v, v + 1)`.
/// Segments with a non-finite endpoint never hit.
pub(crate) fn march<T>(
    start: Vec3,
    end: Vec3,
    lo: Vec3,
    hi: Vec3,
    probe: impl FnMut(IVec3) -> Option<T>,
) -> Option<MarchHit<T>> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    let (t0, t1, entry_normal) = clip_segment(start, end, lo, hi)?;
    let delta = end - start;
    let hit = walk(start + delta * t0, start + delta * t1, entry_normal, probe)?;
    Some(MarchHit {
        t: t0 + hit.t * (t1 - t0),
        ..hit
    })
}

/// Parameter range of `start .. end` inside `[lo, hi]`, plus the outward
/// normal of the box face the segment enters through (zero when `start` is
/// already inside).
fn clip_segment(start: Vec3, end: Vec3, lo: Vec3, hi: Vec3) -> Option<(f32, f32, IVec3)> {
    let delta = end - start;
    let (mut t0, mut t1) = (0.0_f32, 1.0_f32);
    let mut entry_normal = IVec3::ZERO;
    for axis in 0..3 {
        if delta[axis].abs() < f32::EPSILON {
            if start[axis] < lo[axis] || start[axis] > hi[axis] {
                return None;
            }
            continue;
        }
        let a = (lo[axis] - start[axis]) / delta[axis];
        let b = (hi[axis] - start[axis]) / delta[axis];
        let (near, far) = if a < b { (a, b) } else { (b, a) };
        if near > t0 {
            t0 = near;
            entry_normal = IVec3::ZERO;
            entry_normal[axis] = if delta[axis] > 0.0 { -1 } else { 1 };
        }
        t1 = t1.min(far);
        if t0 > t1 {
            return None;
        }
    }
    Some((t0, t1, entry_normal))
}

/// Unclipped DDA over `start .. end`. The first voxel reports
/// `entry_normal`; every later one the face it was stepped into through.
fn walk<T>(
    start: Vec3,
    end: Vec3,
    entry_normal: IVec3,
    mut probe: impl FnMut(IVec3) -> Option<T>,
) -> Option<MarchHit<T>> {
    let mut axes = [
        Axis::new(start.x, end.x),
        Axis::new(start.y, end.y),
        Axis::new(start.z, end.z),
    ];
    let mut voxel = start.floor().as_ivec3();
    // One step per voxel boundary between the two endpoints.
    let mut steps_left = (end.floor().as_ivec3() - voxel).abs().element_sum();
    let mut face_normal = entry_normal;
    let mut t = 0.0;

    loop {
        if let Some(value) = probe(voxel) {
            return Some(MarchHit {
                value,
                face_normal,
                t,
            });
        }
        if steps_left <= 0 {
            return None;
        }

        let [x, y, z] = &axes;
        let axis = if x.t_max < y.t_max {
            if x.t_max < z.t_max { 0 } else { 2 }
        } else if y.t_max < z.t_max {
            1
        } else {
            2
        };

        let next = &mut axes[axis];
        if next.t_max > 1.0 {
            // Every axis crosses its next boundary past the segment end.
            return None;
        }
        t = next.t_max;
        next.t_max += next.t_delta;
        voxel[axis] += next.step;
        face_normal = IVec3::ZERO;
        face_normal[axis] = -next.step;
        steps_left -= 1;
    }
}
