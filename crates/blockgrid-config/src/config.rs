use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// `<platform config dir>/blockgrid`, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("blockgrid"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub edit: EditConfig,
    pub debug: DebugConfig,
}

/// Grid shape and generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunks per side of the square grid.
    pub chunk_range: u32,
    pub chunk_width: u32,
    pub chunk_height: u32,
    pub chunk_depth: u32,
    /// Terrain seed; `None` picks a fresh one at startup.
    pub seed: Option<u64>,
}

/// How raycasts search across chunk boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum RaycastMode {
    /// Origin chunk plus its four lattice neighbors.
    #[default]
    NeighborFan,
    /// One walk across the whole grid.
    Continuous,
}

/// Edit-controller tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditConfig {
    pub raycast_mode: RaycastMode,
    /// Rebuild neighbor meshes after radius edits as well.
    pub propagate_radius_edits: bool,
    /// Ray length for removing blocks.
    pub remove_reach: f32,
    /// Ray length for placing blocks.
    pub place_reach: f32,
    /// Radius of the bulk clear around the player.
    pub clear_radius: f32,
    /// Block id used for placement.
    pub placed_block: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_range: 4,
            chunk_width: 20,
            chunk_height: 50,
            chunk_depth: 20,
            seed: None,
        }
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            raycast_mode: RaycastMode::NeighborFan,
            propagate_radius_edits: false,
            remove_reach: 10.5,
            place_reach: 5.5,
            clear_radius: 10.0,
            placed_block: 1,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        let path = config_dir.join(CONFIG_FILE);
        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    /// Returns `Some(new_config)` if the file on disk differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine() {
        let config = Config::default();
        assert_eq!(config.world.chunk_range, 4);
        assert_eq!(
            (config.world.chunk_width, config.world.chunk_height, config.world.chunk_depth),
            (20, 50, 20)
        );
        assert_eq!(config.edit.raycast_mode, RaycastMode::NeighborFan);
        assert!(!config.edit.propagate_radius_edits);
        assert_eq!(config.edit.remove_reach, 10.5);
        assert_eq!(config.edit.place_reach, 5.5);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.world.seed = Some(42);
        config.edit.raycast_mode = RaycastMode::Continuous;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(world: (chunk_range: 2))").unwrap();
        assert_eq!(config.world.chunk_range, 2);
        assert_eq!(config.world.chunk_width, 20);
        assert_eq!(config.edit, EditConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.chunk_range = 8;
        config.edit.clear_radius = 3.5;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());

        let mut modified = config.clone();
        modified.edit.propagate_radius_edits = true;
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded, Some(modified));
    }

    #[test]
    fn test_load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "(world: oops)").unwrap();
        match Config::load_or_create(dir.path()) {
            Err(ConfigError::Parse { path, .. }) => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
