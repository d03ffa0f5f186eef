//! Headless demo: builds a noise-terrain chunk grid and runs a short scripted
//! edit session against it.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p blockgrid-demo -- --range 6 --raycast-mode continuous`.

mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use blockgrid_config::{CliArgs, Config, default_config_dir};
use blockgrid_terrain::NoiseTerrain;
use blockgrid_world::{ChunkDims, ChunkGrid, ChunkMesh, GridError};
use clap::Parser;
use glam::Vec3;
use tracing::{error, info};

use crate::session::{EditSession, grid_settings};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("invalid chunk dimensions: {0}")]
    Dims(#[from] blockgrid_world::ChunkDimsError),
    #[error("failed to build grid: {0}")]
    Grid(#[from] GridError),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    blockgrid_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let world = &config.world;
    let seed = world.seed.unwrap_or_else(rand::random);
    info!("Generating terrain with seed {}", seed);

    let dims = ChunkDims::new(world.chunk_width, world.chunk_height, world.chunk_depth)?;
    let terrain = NoiseTerrain::new(seed);
    let grid = ChunkGrid::new(world.chunk_range, dims, &terrain, grid_settings(&config.edit))?;
    let initial_faces = grid.total_face_count();

    let mut session = EditSession::new(grid, config.edit.clone());
    if !session.spawn_at(0.5, 0.5) {
        info!("No ground under the spawn point, skipping edits");
        return Ok(());
    }

    for _ in 0..3 {
        if session.mine(Vec3::NEG_Y).is_none() {
            break;
        }
    }
    for direction in [Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, -1.0, 1.0)] {
        let _ = session.build(direction);
    }
    let cleared = session.clear_around();
    info!("Cleared radius {} touching {} chunks", config.edit.clear_radius, cleared.len());

    let grid = session.grid();
    let (vertex_bytes, index_bytes) = grid.chunks().fold((0, 0), |(v, i), (_, c)| {
        (v + c.mesh().vertex_bytes().len(), i + c.mesh().index_bytes().len())
    });
    let largest = grid
        .chunks()
        .map(|(_, c)| c.mesh())
        .max_by_key(|m| m.face_count())
        .map(ChunkMesh::face_count)
        .unwrap_or(0);
    let stats = session.stats();
    info!(
        "Session done at {}: {} mined, {} placed, {} rejected, {} mesh rebuilds",
        session.player(),
        stats.mined,
        stats.placed,
        stats.rejected,
        stats.meshes_rebuilt
    );
    info!(
        "Faces {} -> {}, {} vertex bytes, {} index bytes, largest chunk mesh {} faces",
        initial_faces,
        grid.total_face_count(),
        vertex_bytes,
        index_bytes,
        largest
    );
    Ok(())
}
