use std::path::Path;

use tracing::debug;

use crate::error::{ChartOptsError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{CONFIG_VERSION, ChartConfig};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<ChartConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<ChartConfig>;
}

pub const LOCAL_CONFIG_NAME: &str = ".chart-opts.toml";

fn validate_config_version(config: &ChartConfig) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(ChartOptsError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Parse and validate a config document.
///
/// # Errors
/// Returns an error if the TOML is invalid or the version is unsupported.
pub fn parse_config(content: &str) -> Result<ChartConfig> {
    let config: ChartConfig = toml::from_str(content)?;
    validate_config_version(&config)?;
    Ok(config)
}

/// Loads `.chart-opts.toml` through a [`FileSystem`].
#[derive(Debug, Default, Clone)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn read_config(&self, path: &Path) -> Result<ChartConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ChartOptsError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        parse_config(&content)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<ChartConfig> {
        let path = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if !self.fs.exists(&path) {
            debug!(path = %path.display(), "No config file found, using defaults");
            return Ok(ChartConfig::default());
        }
        debug!(path = %path.display(), "Loading config");
        self.read_config(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<ChartConfig> {
        debug!(path = %path.display(), "Loading config");
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
