//! The chunk grid.
//!
//! [`ChunkGrid`] owns `R x R` chunks in a flat arena indexed by
//! `gy * R + gx`. Chunks are created once, populated by a
//! [`TerrainGenerator`], linked to their four lattice neighbors, and meshed.
//! After that only block contents and meshes change.
//!
//! World layout: the chunk at lattice cell `(gx, gy)` has its voxel origin at
//! `(gx * W - R * W / 2, -H, gy * D - R * D / 2)`, so the grid is centered on
//! the world origin horizontally and its top surface sits at `y = 0`.
//!
//! Every mutation rebuilds the affected meshes before returning and reports
//! them as [`MeshUpdates`].

use blockgrid_mesh::{ChunkNeighborhood, MeshInvalidator, extract_mesh};
use blockgrid_terrain::TerrainGenerator;
use blockgrid_voxel::{BlockId, ChunkData, ChunkDims, Side};
use glam::{IVec2, IVec3, Mat4, Vec3};
use rand::Rng;

use crate::aabb::Aabb;
use crate::chunk::{Chunk, ChunkHandle};
use crate::error::GridError;
use crate::raycast::{RaycastMode, VoxelRay, VoxelRaycastHit, march};
use crate::updates::MeshUpdates;

/// Largest supported grid range.
pub const MAX_RANGE: u32 = 1024;

/// Behavior switches for edits and raycasts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSettings {
    pub raycast_mode: RaycastMode,
    /// Also rebuild the lattice neighbors of every chunk a radius edit
    /// changed. Off by default: radius edits rebuild only the chunks whose
    /// blocks changed.
    pub propagate_radius_edits: bool,
}

pub struct ChunkGrid {
    range: u32,
    dims: ChunkDims,
    chunks: Vec<Chunk>,
    /// Maps lattice coordinates `(gx, 0, gy)` to chunk voxel origins.
    placement: Mat4,
    settings: GridSettings,
}

impl ChunkGrid {
    /// Creates, populates, links and meshes `range * range` chunks.
    pub fn new<T>(
        range: u32,
        dims: ChunkDims,
        terrain: &T,
        settings: GridSettings,
    ) -> Result<Self, GridError>
    where
        T: TerrainGenerator + ?Sized,
    {
        if range == 0 {
            return Err(GridError::ZeroRange);
        }
        if range > MAX_RANGE {
            return Err(GridError::RangeTooLarge(range));
        }

        let extent = dims.extent().as_vec3();
        let placement = Mat4::from_translation(Vec3::new(
            -(range as f32) * extent.x * 0.5,
            -extent.y,
            -(range as f32) * extent.z * 0.5,
        )) * Mat4::from_scale(Vec3::new(extent.x, 1.0, extent.z));

        let mut chunks = Vec::with_capacity((range * range) as usize);
        let mut column = vec![BlockId::AIR; dims.height() as usize];
        for gy in 0..range as i32 {
            for gx in 0..range as i32 {
                let origin = placement.transform_point3(Vec3::new(gx as f32, 0.0, gy as f32));
                let mut data = ChunkData::new(dims);
                for z in 0..dims.depth() as i32 {
                    for x in 0..dims.width() as i32 {
                        column.fill(BlockId::AIR);
                        let corner = origin + Vec3::new(x as f32, 0.0, z as f32);
                        terrain.fill_column(corner.x, corner.z, &mut column);
                        data.write_column(x, z, &column);
                    }
                }
                chunks.push(Chunk::new(data, IVec2::new(gx, gy), origin));
            }
        }

        let mut grid = Self {
            range,
            dims,
            chunks,
            placement,
            settings,
        };

        for i in 0..grid.chunks.len() {
            let pos = grid.chunks[i].grid_pos();
            for side in Side::ALL {
                let neighbor = grid.handle_at(pos + side.grid_offset());
                grid.chunks[i].neighbors[side.index()] = neighbor;
            }
        }

        let mut initial = MeshUpdates::default();
        for i in 0..grid.chunks.len() {
            grid.remesh(ChunkHandle(i as u32), &mut initial);
        }

        tracing::info!(
            "Chunk grid ready: {}x{} chunks of {}x{}x{}, {} faces",
            range,
            range,
            dims.width(),
            dims.height(),
            dims.depth(),
            grid.total_face_count(),
        );
        Ok(grid)
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    pub fn settings(&self) -> GridSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: GridSettings) {
        self.settings = settings;
    }

    pub fn placement(&self) -> Mat4 {
        self.placement
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk(&self, handle: ChunkHandle) -> Option<&Chunk> {
        self.chunks.get(handle.index())
    }

    pub fn chunks(&self) -> impl Iterator<Item = (ChunkHandle, &Chunk)> {
        self.chunks
            .iter()
            .enumerate()
            .map(|(i, c)| (ChunkHandle(i as u32), c))
    }

    /// Handle of the chunk at a lattice cell, `None` outside `[0, R)^2`.
    pub fn handle_at(&self, grid_pos: IVec2) -> Option<ChunkHandle> {
        let r = self.range as i32;
        if grid_pos.x < 0 || grid_pos.y < 0 || grid_pos.x >= r || grid_pos.y >= r {
            return None;
        }
        Some(ChunkHandle((grid_pos.y * r + grid_pos.x) as u32))
    }

    /// Lattice cell containing a world position. May lie outside the grid.
    pub fn grid_coord_of(&self, world: Vec3) -> IVec2 {
        let p = self.placement.inverse().transform_point3(world);
        IVec2::new(p.x.floor() as i32, p.z.floor() as i32)
    }

    /// The chunk and in-bounds local voxel containing a world position.
    pub fn locate(&self, world: Vec3) -> Option<(ChunkHandle, IVec3)> {
        let handle = self.handle_at(self.grid_coord_of(world))?;
        let chunk = self.chunk(handle)?;
        let local = chunk.local_voxel_of(world);
        chunk.data().contains(local.x, local.y, local.z).then_some((handle, local))
    }

    /// Block at a world position, air outside the grid.
    pub fn block_at(&self, world: Vec3) -> BlockId {
        self.locate(world)
            .and_then(|(h, local)| self.chunk(h).map(|c| c.data().get_at(local)))
            .unwrap_or(BlockId::AIR)
    }

    /// World-space box around every chunk.
    pub fn bounds(&self) -> Aabb {
        self.chunks
            .iter()
            .map(Chunk::bounds)
            .reduce(|a, b| a.union(&b))
            .unwrap_or(Aabb::new(Vec3::ZERO, Vec3::ZERO))
    }

    pub fn total_face_count(&self) -> usize {
        self.chunks.iter().map(|c| c.mesh().face_count()).sum()
    }

    /// Borrowed view used for extraction: the chunk plus its linked neighbors.
    pub fn neighborhood(&self, handle: ChunkHandle) -> Option<ChunkNeighborhood<'_>> {
        let chunk = self.chunk(handle)?;
        let mut hood = ChunkNeighborhood::new(chunk.data(), chunk.local_to_world());
        for side in Side::ALL {
            if let Some(n) = chunk.neighbor(side).and_then(|h| self.chunk(h)) {
                hood = hood.with_neighbor(side, n.data(), n.world_to_local());
            }
        }
        Some(hood)
    }

    fn remesh(&mut self, handle: ChunkHandle, updates: &mut MeshUpdates) {
        let Some(mesh) = self.neighborhood(handle).map(|hood| extract_mesh(&hood)) else {
            return;
        };
        tracing::trace!("Extracted chunk {:?}: {} faces", handle, mesh.face_count());
        self.chunks[handle.index()].replace_mesh(mesh);
        updates.push(handle);
    }

    fn remesh_with_neighbors(&mut self, handle: ChunkHandle, updates: &mut MeshUpdates) {
        self.remesh(handle, updates);
        for side in Side::ALL {
            if let Some(n) = self.chunk(handle).and_then(|c| c.neighbor(side)) {
                self.remesh(n, updates);
            }
        }
    }

    // -- edits -------------------------------------------------------------

    /// Sets the voxel containing a world position.
    ///
    /// Positions outside every chunk are rejected. Returns the rebuilt chunks,
    /// which is empty when the block was already `block`.
    pub fn set_voxel(&mut self, world: Vec3, block: BlockId) -> MeshUpdates {
        match self.locate(world) {
            Some((handle, local)) => self.set_voxel_local(handle, local, block),
            None => {
                tracing::trace!("Rejected edit outside the grid at {world}");
                MeshUpdates::default()
            }
        }
    }

    /// Sets a voxel by chunk-local coordinate. Out-of-range coordinates are
    /// rejected; they never spill into a neighbor.
    pub fn set_voxel_local(
        &mut self,
        handle: ChunkHandle,
        local: IVec3,
        block: BlockId,
    ) -> MeshUpdates {
        let mut updates = MeshUpdates::default();
        let Some(chunk) = self.chunks.get_mut(handle.index()) else {
            return updates;
        };
        if !chunk.data.set_at(local, block) {
            return updates;
        }

        self.remesh(handle, &mut updates);
        for side in MeshInvalidator::boundary_sides(local, self.dims) {
            if let Some(n) = self.chunk(handle).and_then(|c| c.neighbor(side)) {
                self.remesh(n, &mut updates);
            }
        }
        tracing::debug!(
            "Set {:?} {} to {:?}, rebuilt {:?}",
            handle,
            local,
            block,
            updates.as_slice()
        );
        updates
    }

    /// Sets every voxel strictly closer than `radius` to a world-space center.
    ///
    /// Every chunk whose bounds touch the sphere's bounding box receives the
    /// center in its own voxel space, snapped down to the containing voxel.
    /// Chunks whose blocks changed are rebuilt; their neighbors are rebuilt
    /// only with [`GridSettings::propagate_radius_edits`].
    pub fn fill_radius(&mut self, center: Vec3, radius: f32, block: BlockId) -> MeshUpdates {
        let mut updates = MeshUpdates::default();
        if radius.is_nan() || radius <= 0.0 {
            return updates;
        }
        let sphere = Aabb::from_center_half_extents(center, Vec3::splat(radius));

        let mut touched = Vec::new();
        for (i, chunk) in self.chunks.iter_mut().enumerate() {
            if !chunk.bounds().intersects(&sphere) {
                continue;
            }
            let local_center = chunk.local_voxel_of(center).as_vec3();
            if chunk.data.fill_sphere(local_center, radius, block) > 0 {
                touched.push(ChunkHandle(i as u32));
            }
        }

        for &handle in &touched {
            if self.settings.propagate_radius_edits {
                self.remesh_with_neighbors(handle, &mut updates);
            } else {
                self.remesh(handle, &mut updates);
            }
        }
        tracing::debug!(
            "Filled radius {} around {} with {:?}, rebuilt {:?}",
            radius,
            center,
            block,
            updates.as_slice()
        );
        updates
    }

    /// Sets every voxel of one chunk, then rebuilds it and its neighbors.
    pub fn fill_chunk(&mut self, handle: ChunkHandle, block: BlockId) -> MeshUpdates {
        let mut updates = MeshUpdates::default();
        let Some(chunk) = self.chunks.get_mut(handle.index()) else {
            return updates;
        };
        chunk.data.fill(block);
        self.remesh_with_neighbors(handle, &mut updates);
        tracing::debug!("Filled {:?} with {:?}", handle, block);
        updates
    }

    /// Fills one chunk with uniform random ids in `[min, max)`, then rebuilds
    /// it and its neighbors.
    pub fn randomize_chunk<R: Rng + ?Sized>(
        &mut self,
        handle: ChunkHandle,
        rng: &mut R,
        min: BlockId,
        max: BlockId,
    ) -> MeshUpdates {
        let mut updates = MeshUpdates::default();
        let Some(chunk) = self.chunks.get_mut(handle.index()) else {
            return updates;
        };
        chunk.data.randomize(rng, min, max);
        self.remesh_with_neighbors(handle, &mut updates);
        tracing::debug!("Randomized {:?} with ids {}..{}", handle, min.0, max.0);
        updates
    }

    /// Clears the voxel a raycast hit.
    pub fn remove_at(&mut self, hit: &VoxelRaycastHit) -> MeshUpdates {
        self.set_voxel_local(hit.chunk, hit.voxel, BlockId::AIR)
    }

    /// Places `block` in the voxel in front of the face a raycast hit.
    ///
    /// The target must lie inside the hit chunk. When `blocked` is given, a
    /// target cell overlapping that world-space box is rejected.
    pub fn place_against(
        &mut self,
        hit: &VoxelRaycastHit,
        block: BlockId,
        blocked: Option<&Aabb>,
    ) -> MeshUpdates {
        if hit.face_normal == IVec3::ZERO {
            return MeshUpdates::default();
        }
        let target = hit.voxel + hit.face_normal;
        let Some(chunk) = self.chunk(hit.chunk) else {
            return MeshUpdates::default();
        };
        if !chunk.data().contains(target.x, target.y, target.z) {
            tracing::trace!("Rejected placement outside {:?} at {}", hit.chunk, target);
            return MeshUpdates::default();
        }
        if blocked.is_some_and(|b| chunk.voxel_bounds(target).overlaps(b)) {
            tracing::trace!("Rejected placement at {} overlapping a blocker", target);
            return MeshUpdates::default();
        }
        self.set_voxel_local(hit.chunk, target, block)
    }

    // -- queries -----------------------------------------------------------

    /// First solid voxel along `ray`, searched with the configured mode.
    pub fn raycast(&self, ray: &VoxelRay) -> Option<VoxelRaycastHit> {
        self.raycast_with(ray, self.settings.raycast_mode)
    }

    pub fn raycast_with(&self, ray: &VoxelRay, mode: RaycastMode) -> Option<VoxelRaycastHit> {
        if !ray.origin.is_finite() || !ray.end().is_finite() {
            tracing::trace!("Skipped non-finite raycast from {}", ray.origin);
            return None;
        }
        match mode {
            RaycastMode::NeighborFan => self.raycast_fan(ray),
            RaycastMode::Continuous => self.raycast_continuous(ray),
        }
    }

    /// Walks the part of the ray inside one chunk, in its own voxel space.
    fn raycast_chunk(&self, handle: ChunkHandle, ray: &VoxelRay) -> Option<VoxelRaycastHit> {
        let chunk = self.chunk(handle)?;
        let to_local = chunk.world_to_local();
        let start = to_local.transform_point3(ray.origin);
        let end = to_local.transform_point3(ray.end());
        let data = chunk.data();
        let extent = self.dims.extent().as_vec3();
        let hit = march(start, end, Vec3::ZERO, extent, |v| {
            let block = data.get_at(v);
            block.is_solid().then_some((v, block))
        })?;
        let (voxel, block) = hit.value;
        Some(VoxelRaycastHit {
            chunk: handle,
            voxel,
            face_normal: hit.face_normal,
            distance: hit.t * ray.max_distance,
            block,
        })
    }

    fn raycast_fan(&self, ray: &VoxelRay) -> Option<VoxelRaycastHit> {
        let start = self.grid_coord_of(ray.origin);
        let fan = [
            IVec2::ZERO,
            IVec2::new(1, 0),
            IVec2::new(-1, 0),
            IVec2::new(0, -1),
            IVec2::new(0, 1),
        ];
        fan.into_iter()
            .filter_map(|offset| self.handle_at(start + offset))
            .find_map(|handle| self.raycast_chunk(handle, ray))
    }

    fn raycast_continuous(&self, ray: &VoxelRay) -> Option<VoxelRaycastHit> {
        // Whole-grid voxel space: voxel (0, 0, 0) is the first voxel of chunk (0, 0).
        let origin = self.placement.transform_point3(Vec3::ZERO);
        let extent = self.dims.extent();
        let r = self.range as i32;
        let size = IVec3::new(extent.x * r, extent.y, extent.z * r).as_vec3();
        let hit = march(ray.origin - origin, ray.end() - origin, Vec3::ZERO, size, |v| {
            if v.y < 0 || v.y >= extent.y {
                return None;
            }
            let cell = IVec2::new(v.x.div_euclid(extent.x), v.z.div_euclid(extent.z));
            let handle = self.handle_at(cell)?;
            let local = IVec3::new(v.x.rem_euclid(extent.x), v.y, v.z.rem_euclid(extent.z));
            let block = self.chunk(handle)?.data().get_at(local);
            block.is_solid().then_some((handle, local, block))
        })?;
        let (chunk, voxel, block) = hit.value;
        Some(VoxelRaycastHit {
            chunk,
            voxel,
            face_normal: hit.face_normal,
            distance: hit.t * ray.max_distance,
            block,
        })
    }
}
