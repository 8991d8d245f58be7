use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub fetch: FetchConfig,
    pub ui: UiConfig,
    /// Manifest opened when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_site: Option<PathBuf>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Fragment fetching configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// Size of the main interface font (in points)
    pub font_size: f32,
    /// Window width below which nav links collapse behind the menu toggle
    pub nav_collapse_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            fetch: FetchConfig { timeout_secs: 30 },
            ui: UiConfig {
                font_size: 14.0,
                nav_collapse_width: 560.0,
            },
            default_site: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "mirador") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("failed to parse config file: {}, using defaults", e);
                    }
                },
                Err(e) => {
                    warn!("failed to read config file: {}, using defaults", e);
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }
}
