//! A headless edit controller: a player standing on the grid who mines,
//! builds and clears blocks through raycasts.

use blockgrid_config::EditConfig;
use blockgrid_world::{
    Aabb, BlockId, ChunkGrid, GridSettings, MeshUpdates, RaycastMode, VoxelRay,
};
use glam::Vec3;

const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.3, 0.9, 0.3);
const EYE_HEIGHT: f32 = 0.7;

/// Grid behavior selected by the edit settings.
pub fn grid_settings(edit: &EditConfig) -> GridSettings {
    GridSettings {
        raycast_mode: match edit.raycast_mode {
            blockgrid_config::RaycastMode::NeighborFan => RaycastMode::NeighborFan,
            blockgrid_config::RaycastMode::Continuous => RaycastMode::Continuous,
        },
        propagate_radius_edits: edit.propagate_radius_edits,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub mined: usize,
    pub placed: usize,
    pub rejected: usize,
    pub meshes_rebuilt: usize,
}

pub struct EditSession {
    grid: ChunkGrid,
    edit: EditConfig,
    /// Center of the player's collision box.
    player: Vec3,
    stats: SessionStats,
}

impl EditSession {
    pub fn new(grid: ChunkGrid, edit: EditConfig) -> Self {
        Self {
            grid,
            edit,
            player: Vec3::ZERO,
            stats: SessionStats::default(),
        }
    }

    pub fn grid(&self) -> &ChunkGrid {
        &self.grid
    }

    pub fn player(&self) -> Vec3 {
        self.player
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn player_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.player, PLAYER_HALF_EXTENTS)
    }

    fn eye(&self) -> Vec3 {
        self.player + Vec3::Y * EYE_HEIGHT
    }

    /// Stands the player on the highest solid voxel of the column at `x, z`.
    /// Returns false when the column is empty.
    pub fn spawn_at(&mut self, x: f32, z: f32) -> bool {
        let top = self.grid.bounds().max.y;
        let depth = self.grid.bounds().size().y + 1.0;
        let ray = VoxelRay::new(Vec3::new(x, top + 0.5, z), Vec3::NEG_Y, depth + 0.5);
        let Some(hit) = self.grid.raycast(&ray) else {
            return false;
        };
        let Some(chunk) = self.grid.chunk(hit.chunk) else {
            return false;
        };
        let floor = chunk.voxel_bounds(hit.voxel).max.y;
        self.player = Vec3::new(x, floor + PLAYER_HALF_EXTENTS.y, z);
        tracing::info!("Player spawned at {}", self.player);
        true
    }

    /// Removes the first block along `direction` within the remove reach.
    pub fn mine(&mut self, direction: Vec3) -> Option<MeshUpdates> {
        let ray = VoxelRay::new(self.eye(), direction, self.edit.remove_reach);
        let hit = self.grid.raycast(&ray)?;
        let updates = self.grid.remove_at(&hit);
        if updates.is_empty() {
            self.stats.rejected += 1;
        } else {
            self.stats.mined += 1;
            self.stats.meshes_rebuilt += updates.len();
        }
        tracing::debug!("Mined {:?} at {} in {:?}", hit.block, hit.voxel, hit.chunk);
        Some(updates)
    }

    /// Places the configured block against the first face along
    /// `direction` within the place reach, unless it would enclose the player.
    pub fn build(&mut self, direction: Vec3) -> Option<MeshUpdates> {
        let ray = VoxelRay::new(self.eye(), direction, self.edit.place_reach);
        let hit = self.grid.raycast(&ray)?;
        let player_box = self.player_box();
        let updates =
            self.grid
                .place_against(&hit, BlockId(self.edit.placed_block), Some(&player_box));
        if updates.is_empty() {
            self.stats.rejected += 1;
        } else {
            self.stats.placed += 1;
            self.stats.meshes_rebuilt += updates.len();
        }
        Some(updates)
    }

    /// Clears a sphere of `clear_radius` around the player's feet.
    pub fn clear_around(&mut self) -> MeshUpdates {
        let feet = self.player - Vec3::Y * PLAYER_HALF_EXTENTS.y;
        let updates = self
            .grid
            .fill_radius(feet, self.edit.clear_radius, BlockId::AIR);
        self.stats.meshes_rebuilt += updates.len();
        updates
    }
}
