use crate::error::{ParklotError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "Enter command: ";

/// Interpreter settings, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ParklotConfig {
    /// Print the command menu before each interactive prompt
    #[serde(default = "default_true")]
    pub show_menu: bool,

    /// Prompt written before each interactive line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Colorize messages when the terminal supports it
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for ParklotConfig {
    fn default() -> Self {
        Self {
            show_menu: true,
            prompt: default_prompt(),
            color: true,
        }
    }
}

impl ParklotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            ParklotError::Config(format!("{}: {}", config_path.display(), e))
        })
    }
}
