//! Rolling hills from three octaves of OpenSimplex noise, with a stone base
//! layer and a ragged snow cap.

use blockgrid_voxel::BlockId;
use noise::{NoiseFn, OpenSimplex};
use rand::Rng;

use crate::TerrainGenerator;
use crate::seed::column_rng;

pub const GRASS: BlockId = BlockId(1);
pub const STONE: BlockId = BlockId(2);
pub const SNOW: BlockId = BlockId(3);

/// Everything below this height is stone.
const STONE_TOP: usize = 10;
/// Snow may appear strictly above this height.
const SNOW_START: usize = 30;
/// Lowest point of the height curve before the detail octave pulls it down.
const BASE_HEIGHT: f32 = 10.0;

/// (frequency, offset, weight, remap to [0, 1])
const OCTAVES: [(f64, f64, f64, bool); 3] = [
    (0.01, 0.0, 2.0, true),
    (0.038, 41433.0, 0.3, false),
    (0.008, 411433.0, 1.2, true),
];
const WEIGHT_SUM: f64 = 3.5;

fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// Snow becomes more likely towards the top of the column and is certain
/// once `y` is 40% of the way from the snow line to `snow_top`.
fn snow_roll(rng: &mut impl Rng, y: usize, snow_top: f32) -> bool {
    let t = inverse_lerp(SNOW_START as f32, snow_top, y as f32);
    let exponent = 1.0 - (t * 2.5).min(1.0);
    rng.random::<f32>().powf(exponent) > 0.5
}

/// Folds a 64-bit world seed into the 32-bit seed the noise source takes, so
/// the high bits still change the heightmap.
fn noise_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

/// Seeded noise terrain. The same seed always produces the same world.
pub struct NoiseTerrain {
    noise: OpenSimplex,
    seed: u64,
}

impl NoiseTerrain {
    pub fn new(seed: u64) -> Self {
        Self {
            noise: OpenSimplex::new(noise_seed(seed)),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Normalised height sample, roughly in `[-0.09, 1]`.
    pub fn sample(&self, world_x: f32, world_z: f32) -> f32 {
        let (x, z) = (world_x as f64, world_z as f64);
        let total: f64 = OCTAVES
            .iter()
            .map(|&(frequency, offset, weight, remap)| {
                let n = self.noise.get([x * frequency + offset, z * frequency + offset]);
                let n = if remap { (n + 1.0) * 0.5 } else { n };
                n * weight
            })
            .sum();
        (total / WEIGHT_SUM) as f32
    }

    /// Surface height in voxels for a column of `column_height` voxels.
    /// Every `y` below this value is solid.
    pub fn surface_height(&self, world_x: f32, world_z: f32, column_height: usize) -> f32 {
        self.sample(world_x, world_z) * (column_height as f32 - BASE_HEIGHT) + BASE_HEIGHT
    }
}

impl TerrainGenerator for NoiseTerrain {
    fn fill_column(&self, world_x: f32, world_z: f32, column: &mut [BlockId]) {
        let column_height = column.len();
        let surface = self.surface_height(world_x, world_z, column_height);
        let snow_top = column_height as f32 - 5.0;
        let mut rng = column_rng(self.seed, world_x.floor() as i32, world_z.floor() as i32);

        for (y, block) in column.iter_mut().enumerate() {
            if y as f32 >= surface {
                break;
            }
            *block = if y < STONE_TOP {
                STONE
            } else if y > SNOW_START && snow_roll(&mut rng, y, snow_top) {
                SNOW
            } else {
                GRASS
            };
        }
    }
}
