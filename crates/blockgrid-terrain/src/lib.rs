//! Initial block ids for freshly created chunks.
//!
//! The grid asks a [`TerrainGenerator`] for one column at a time, addressed
//! by the world-space position of the column's voxel corner.

mod flat;
mod noise_terrain;
mod seed;

pub use flat::FlatTerrain;
pub use noise_terrain::{GRASS, NoiseTerrain, SNOW, STONE};
pub use seed::{column_rng, derive_column_seed};

use blockgrid_voxel::BlockId;

/// Fills a vertical column of block ids, bottom (`column[0]`) to top.
///
/// `column` arrives filled with air and its length is the chunk height.
pub trait TerrainGenerator {
    fn fill_column(&self, world_x: f32, world_z: f32, column: &mut [BlockId]);
}

impl<F> TerrainGenerator for F
where
    F: Fn(f32, f32, &mut [BlockId]),
{
    fn fill_column(&self, world_x: f32, world_z: f32, column: &mut [BlockId]) {
        self(world_x, world_z, column)
    }
}
