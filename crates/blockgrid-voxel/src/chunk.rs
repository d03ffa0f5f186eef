//! Dense per-chunk block storage.
//!
//! A [`ChunkData`] stores exactly `width * height * depth` block ids in a flat
//! `Vec`. The linear index is `x + y * width + z * width * height`, so `x`
//! varies fastest. Every accessor takes signed coordinates: anything outside
//! the chunk reads as air and is ignored on write.

use glam::{IVec3, Vec3};
use rand::Rng;

use crate::block::BlockId;

/// Largest extent allowed on any chunk axis. Local coordinates and the block
/// ids carried in mesh vertices are stored as `u8`.
pub const MAX_CHUNK_EXTENT: u32 = 255;

/// Invalid chunk dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChunkDimsError {
    #[error("chunk dimensions must be non-zero, got {0}x{1}x{2}")]
    Zero(u32, u32, u32),
    #[error("chunk extent {0} exceeds the maximum of {max}", max = MAX_CHUNK_EXTENT)]
    TooLarge(u32),
}

/// Chunk extents in voxels along x (width), y (height) and z (depth).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkDims {
    width: u32,
    height: u32,
    depth: u32,
}

impl ChunkDims {
    /// The engine default, 20 x 50 x 20.
    pub const DEFAULT: Self = Self {
        width: 20,
        height: 50,
        depth: 20,
    };

    /// Validates and builds a set of chunk dimensions.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self, ChunkDimsError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(ChunkDimsError::Zero(width, height, depth));
        }
        if let Some(&too_large) = [width, height, depth]
            .iter()
            .find(|&&extent| extent > MAX_CHUNK_EXTENT)
        {
            return Err(ChunkDimsError::TooLarge(too_large));
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn depth(self) -> u32 {
        self.depth
    }

    /// Extents as a signed vector, handy for coordinate math.
    #[inline]
    pub fn extent(self) -> IVec3 {
        IVec3::new(self.width as i32, self.height as i32, self.depth as i32)
    }

    /// Total number of voxels.
    #[inline]
    pub const fn volume(self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Returns `true` when `(x, y, z)` lies inside `[0, W) x [0, H) x [0, D)`.
    #[inline]
    pub fn contains(self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && (z as u32) < self.depth
    }

    /// Linear index of an in-bounds coordinate, `None` otherwise.
    #[inline]
    pub fn index(self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.contains(x, y, z) {
            return None;
        }
        let (w, h) = (self.width as usize, self.height as usize);
        Some(x as usize + y as usize * w + z as usize * w * h)
    }
}

impl Default for ChunkDims {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Flat block array for one chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkData {
    dims: ChunkDims,
    blocks: Vec<BlockId>,
}

impl ChunkData {
    /// Creates a chunk filled with air.
    pub fn new(dims: ChunkDims) -> Self {
        Self::new_filled(dims, BlockId::AIR)
    }

    /// Creates a chunk where every voxel holds `block`.
    pub fn new_filled(dims: ChunkDims, block: BlockId) -> Self {
        Self {
            dims,
            blocks: vec![block; dims.volume()],
        }
    }

    #[inline]
    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// Returns `true` when the coordinate addresses a voxel of this chunk.
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.dims.contains(x, y, z)
    }

    /// Reads a voxel. Out-of-range coordinates read as air.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockId {
        match self.dims.index(x, y, z) {
            Some(i) => self.blocks[i],
            None => BlockId::AIR,
        }
    }

    #[inline]
    pub fn get_at(&self, pos: IVec3) -> BlockId {
        self.get(pos.x, pos.y, pos.z)
    }

    /// Writes a voxel.
    ///
    /// Returns `true` only when the stored value actually changed. Writing
    /// the value already present, or writing outside the chunk, is a no-op.
    pub fn set(&mut self, x: i32, y: i32, z: i32, block: BlockId) -> bool {
        let Some(i) = self.dims.index(x, y, z) else {
            tracing::trace!("ignoring out-of-range write at ({x}, {y}, {z})");
            return false;
        };
        if self.blocks[i] == block {
            return false;
        }
        self.blocks[i] = block;
        true
    }

    #[inline]
    pub fn set_at(&mut self, pos: IVec3, block: BlockId) -> bool {
        self.set(pos.x, pos.y, pos.z, block)
    }

    /// Sets every voxel to `block`.
    pub fn fill(&mut self, block: BlockId) {
        self.blocks.fill(block);
    }

    /// Sets every voxel whose index-space distance to `center` is strictly
    /// less than `radius`. Returns the number of voxels that changed.
    ///
    /// Only the sphere's bounding box clipped to the chunk is visited.
    pub fn fill_sphere(&mut self, center: Vec3, radius: f32, block: BlockId) -> usize {
        if radius.is_nan() || radius <= 0.0 || !center.is_finite() {
            return 0;
        }
        let last = self.dims.extent() - IVec3::ONE;
        let lo = (center - Vec3::splat(radius)).floor().as_ivec3().max(IVec3::ZERO);
        let hi = (center + Vec3::splat(radius)).ceil().as_ivec3().min(last);
        let radius_sq = radius * radius;

        let mut changed = 0;
        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    let offset = Vec3::new(x as f32, y as f32, z as f32) - center;
                    if offset.length_squared() < radius_sq && self.set(x, y, z, block) {
                        changed += 1;
                    }
                }
            }
        }
        changed
    }

    /// Fills every voxel with a uniformly drawn id in `[min, max)`.
    ///
    /// An empty range fills the chunk with `min`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, min: BlockId, max: BlockId) {
        if max.0 <= min.0 {
            self.fill(min);
            return;
        }
        for block in &mut self.blocks {
            *block = BlockId(rng.random_range(min.0..max.0));
        }
    }

    /// Number of non-air voxels.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    /// Raw storage in linear-index order.
    #[inline]
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Writes the column at `(x, z)` bottom to top, ignoring entries above
    /// the chunk height.
    pub fn write_column(&mut self, x: i32, z: i32, column: &[BlockId]) {
        for (y, &block) in column.iter().enumerate().take(self.dims.height as usize) {
            self.set(x, y as i32, z, block);
        }
    }
}
