use crate::output::OutputFormat;
use crate::render::HexColor;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_PREFIX: &str = "INFRING";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AdditiveConfig {
    pub base: i64,
    pub addition: i64,
}

impl Default for AdditiveConfig {
    fn default() -> Self {
        Self {
            base: 5,
            addition: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MultiplicativeConfig {
    pub base: i64,
    pub multiplier: i64,
}

impl Default for MultiplicativeConfig {
    fn default() -> Self {
        Self {
            base: 100,
            multiplier: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    pub radius: f64,
    pub head_width: f64,
    pub size: u32,
    pub format: OutputFormat,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            radius: 0.45,
            head_width: 0.02,
            size: 480,
            format: OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: HexColor,
    pub circle: HexColor,
    pub tick: HexColor,
    pub arrow: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: HexColor::new(0xff, 0xff, 0xff),
            circle: HexColor::new(0x00, 0x00, 0x00),
            tick: HexColor::new(0x1f, 0x77, 0xb4),
            arrow: HexColor::new(0x00, 0x00, 0x00),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub additive: AdditiveConfig,
    pub multiplicative: MultiplicativeConfig,
    pub style: StyleConfig,
    pub theme: ThemeConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "infring", "infring").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Layers built-in defaults, the config file and `INFRING_*` environment variables.
///
/// The default file location is optional; an explicit `path` must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (config_path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (get_config_path()?, false),
    };
    log::debug!("Loading config from {}", config_path.display());

    let s = config::Config::builder()
        .add_source(
            config::File::from(config_path)
                .format(config::FileFormat::Toml)
                .required(required),
        )
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Writes the commented default config unless a file is already there.
pub fn write_default_config(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if path.exists() {
        log::info!("Config already exists at {}", path.display());
    } else {
        fs_err::write(&path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
