use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// The configuration file structure (semver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemverConfig {
    /// Sorting behaviour
    pub sort: SortConfig,

    /// Output formatting
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Sort in descending order
    pub reverse: bool,

    /// Drop unparsable lines instead of failing
    pub skip_invalid: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            reverse: false,
            skip_invalid: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print JSON instead of plain text
    pub json: bool,
}

impl SemverConfig {
    /// Load configuration from semver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join("semver.toml");

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)?;
                let config: SemverConfig = toml::from_str(&content)?;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
