//! Runtime settings for the block grid, persisted as `config.ron`.
//!
//! Values load from disk (created with defaults on first run), then CLI
//! flags override them. Unknown or missing fields fall back to defaults so
//! older and newer files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, EditConfig, RaycastMode, WorldConfig, default_config_dir};
pub use error::ConfigError;
