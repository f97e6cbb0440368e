use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Preferred spelling for rendered flags and options.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlagStyle {
    /// Long spellings, e.g. `--verbose`.
    #[default]
    Long,
    /// Short spellings where one exists, e.g. `-v`.
    Short,
}

/// Configuration stored on disk.
#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub style: FlagStyle,
}

/// Get the configuration file path in a cross-platform way.
fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "curlpie", "curlpie") {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir).ok()?;
        let config_file = config_dir.join("config.json");
        Some(config_file)
    } else {
        None
    }
}

/// Load the configuration from disk.
pub fn load_config() -> Config {
    if let Some(config_path) = get_config_path() {
        if let Ok(data) = fs::read_to_string(config_path) {
            if let Ok(cfg) = serde_json::from_str(&data) {
                return cfg;
            }
        }
    }
    Config::default()
}

/// Save the configuration to disk.
pub fn save_config(config: &Config) -> std::io::Result<()> {
    if let Some(config_path) = get_config_path() {
        let data = serde_json::to_string_pretty(config).map_err(std::io::Error::from)?;
        fs::write(config_path, data)?;
    }
    Ok(())
}
