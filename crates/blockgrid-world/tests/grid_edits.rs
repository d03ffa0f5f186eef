//! Edit routing, mesh re-extraction and cross-chunk face culling through the
//! public grid API.

use blockgrid_mesh::FaceDirection;
use blockgrid_terrain::FlatTerrain;
use blockgrid_world::{BlockId, ChunkDims, ChunkGrid, GridSettings, MeshUpdates};
use glam::{IVec2, IVec3, Vec3};

fn dims() -> ChunkDims {
    ChunkDims::new(4, 6, 4).unwrap()
}

fn empty_grid(range: u32) -> ChunkGrid {
    ChunkGrid::new(range, dims(), &FlatTerrain::empty(), GridSettings::default()).unwrap()
}

fn faces(grid: &ChunkGrid, cell: IVec2) -> usize {
    let handle = grid.handle_at(cell).unwrap();
    grid.chunk(handle).unwrap().mesh().face_count()
}

#[test]
fn test_repeated_set_extracts_once() {
    let mut grid = empty_grid(1);
    let handle = grid.handle_at(IVec2::ZERO).unwrap();
    let revision = grid.chunk(handle).unwrap().mesh_revision();

    let first = grid.set_voxel_local(handle, IVec3::ZERO, BlockId(3));
    let second = grid.set_voxel_local(handle, IVec3::ZERO, BlockId(3));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(grid.chunk(handle).unwrap().mesh_revision(), revision + 1);
}

#[test]
fn test_mining_air_changes_nothing() {
    let mut grid = empty_grid(2);
    let before: Vec<u64> = grid.chunks().map(|(_, c)| c.mesh_revision()).collect();
    for x in -4..4 {
        let updates = grid.set_voxel(Vec3::new(x as f32 + 0.5, -0.5, 0.5), BlockId::AIR);
        assert!(updates.is_empty());
    }
    let after: Vec<u64> = grid.chunks().map(|(_, c)| c.mesh_revision()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_isolated_voxel_on_boundary_has_six_faces() {
    let mut grid = empty_grid(2);
    let handle = grid.handle_at(IVec2::ZERO).unwrap();
    let _ = grid.set_voxel_local(handle, IVec3::new(3, 2, 1), BlockId(1));

    let mesh = grid.chunk(handle).unwrap().mesh();
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.vertices.len(), 36);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(faces(&grid, IVec2::new(1, 0)), 0);
}

#[test]
fn test_voxels_sharing_a_chunk_boundary_cull_both_sides() {
    let mut grid = empty_grid(2);
    let left = grid.handle_at(IVec2::ZERO).unwrap();
    let right = grid.handle_at(IVec2::new(1, 0)).unwrap();

    let _ = grid.set_voxel_local(left, IVec3::new(3, 2, 1), BlockId(1));
    let updates = grid.set_voxel_local(right, IVec3::new(0, 2, 1), BlockId(2));
    assert!(updates.contains(left));
    assert!(updates.contains(right));

    let left_mesh = grid.chunk(left).unwrap().mesh();
    let right_mesh = grid.chunk(right).unwrap().mesh();
    assert_eq!(left_mesh.face_count() + right_mesh.face_count(), 10);
    assert_eq!(left_mesh.count_faces_for_direction(FaceDirection::PosX), 0);
    assert_eq!(right_mesh.count_faces_for_direction(FaceDirection::NegX), 0);

    // Removing one side exposes the other again.
    let updates = grid.set_voxel_local(right, IVec3::new(0, 2, 1), BlockId::AIR);
    assert_eq!(updates.as_slice(), &[right, left]);
    assert_eq!(grid.chunk(left).unwrap().mesh().face_count(), 6);
}

#[test]
fn test_world_edge_exposes_boundary_faces() {
    let grid = ChunkGrid::new(
        1,
        dims(),
        &FlatTerrain::new(6, BlockId(7)),
        GridSettings::default(),
    )
    .unwrap();
    let handle = grid.handle_at(IVec2::ZERO).unwrap();
    let chunk = grid.chunk(handle).unwrap();
    assert!(chunk.data().blocks().iter().all(|&b| b == BlockId(7)));

    let mesh = chunk.mesh();
    for dir in [FaceDirection::PosX, FaceDirection::NegX, FaceDirection::PosZ, FaceDirection::NegZ] {
        assert_eq!(mesh.count_faces_for_direction(dir), 4 * 6, "{dir:?}");
    }
    assert_eq!(mesh.count_faces_for_direction(FaceDirection::PosY), 16);
    assert_eq!(mesh.count_faces_for_direction(FaceDirection::NegY), 16);
}

#[test]
fn test_fill_chunk_then_every_voxel_reads_back() {
    let mut grid = empty_grid(2);
    let handle = grid.handle_at(IVec2::new(1, 1)).unwrap();
    let _ = grid.fill_chunk(handle, BlockId(7));
    let data = grid.chunk(handle).unwrap().data();
    for z in 0..4 {
        for y in 0..6 {
            for x in 0..4 {
                assert_eq!(data.get(x, y, z), BlockId(7));
            }
        }
    }
    // The back and left neighbors now see solid blocks across their faces.
    let back = grid.handle_at(IVec2::new(1, 0)).unwrap();
    let _ = grid.set_voxel_local(back, IVec3::new(1, 1, 3), BlockId(1));
    let mesh = grid.chunk(back).unwrap().mesh();
    assert_eq!(mesh.count_faces_for_direction(FaceDirection::PosZ), 0);
    assert_eq!(mesh.face_count(), 5);
}

#[test]
fn test_radius_edit_leaves_neighbor_meshes_stale_by_default() {
    let mut grid = ChunkGrid::new(
        2,
        dims(),
        &FlatTerrain::new(6, BlockId(1)),
        GridSettings::default(),
    )
    .unwrap();
    let left = grid.handle_at(IVec2::ZERO).unwrap();
    let right = grid.handle_at(IVec2::new(1, 0)).unwrap();
    let right_revision = grid.chunk(right).unwrap().mesh_revision();

    // Entirely inside the left chunk, touching its +x boundary layer.
    let updates = grid.fill_radius(Vec3::new(-0.5, -2.5, -2.5), 0.9, BlockId::AIR);
    assert_eq!(updates.as_slice(), &[left]);
    assert_eq!(grid.chunk(right).unwrap().mesh_revision(), right_revision);
    // The right chunk still has the hole's face culled.
    let right_mesh = grid.chunk(right).unwrap().mesh();
    assert_eq!(right_mesh.count_faces_for_direction(FaceDirection::NegX), 0);

    let mut propagating = ChunkGrid::new(
        2,
        dims(),
        &FlatTerrain::new(6, BlockId(1)),
        GridSettings {
            propagate_radius_edits: true,
            ..GridSettings::default()
        },
    )
    .unwrap();
    let updates = propagating.fill_radius(Vec3::new(-0.5, -2.5, -2.5), 0.9, BlockId::AIR);
    assert!(updates.contains(left));
    assert!(updates.contains(right));
    let right_mesh = propagating.chunk(right).unwrap().mesh();
    assert_eq!(right_mesh.count_faces_for_direction(FaceDirection::NegX), 1);
}

#[test]
fn test_updates_name_exactly_the_rebuilt_meshes() {
    let mut grid = empty_grid(3);
    let revisions = |g: &ChunkGrid| -> Vec<u64> { g.chunks().map(|(_, c)| c.mesh_revision()).collect() };
    let before = revisions(&grid);

    let updates: MeshUpdates = grid.set_voxel(Vec3::new(-2.5, -3.5, -1.5), BlockId(5));
    let after = revisions(&grid);

    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        let handle = grid.chunks().nth(i).map(|(h, _)| h).unwrap();
        if updates.contains(handle) {
            assert_eq!(*a, b + 1);
        } else {
            assert_eq!(a, b);
        }
    }
    assert!(!updates.is_empty());
}
