use crate::api::ParkingApi;
use crate::config::ParklotConfig;
use crate::error::Result;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ParklotContext {
    pub api: ParkingApi,
    pub config: ParklotConfig,
    pub config_dir: Option<PathBuf>,
}

/// Platform config directory, e.g. `~/.config/parklot` on Linux.
/// `None` when no home directory can be determined.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "parklot", "parklot").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Builds a fresh session: an API with no lot yet, plus the config loaded from
/// `config_dir` (or the platform default). Missing config means defaults.
pub fn initialize(config_dir: Option<&Path>) -> Result<ParklotContext> {
    let config_dir = config_dir
        .map(Path::to_path_buf)
        .or_else(default_config_dir);

    let config = match &config_dir {
        Some(dir) => ParklotConfig::load(dir)?,
        None => ParklotConfig::default(),
    };

    Ok(ParklotContext {
        api: ParkingApi::new(),
        config,
        config_dir,
    })
}
