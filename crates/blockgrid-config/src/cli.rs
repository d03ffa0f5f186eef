//! Command-line argument parsing for the block grid demo.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, RaycastMode};

/// Block grid command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "blockgrid", about = "Editable voxel chunk grid")]
pub struct CliArgs {
    /// Chunks per side of the grid.
    #[arg(long)]
    pub range: Option<u32>,

    /// Terrain seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How raycasts cross chunk boundaries.
    #[arg(long, value_enum)]
    pub raycast_mode: Option<RaycastMode>,

    /// Rebuild neighbor meshes after radius edits.
    #[arg(long)]
    pub propagate_radius_edits: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(range) = args.range {
            self.world.chunk_range = range;
        }
        if let Some(seed) = args.seed {
            self.world.seed = Some(seed);
        }
        if let Some(mode) = args.raycast_mode {
            self.edit.raycast_mode = mode;
        }
        if let Some(propagate) = args.propagate_radius_edits {
            self.edit.propagate_radius_edits = propagate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
