//! Option overrides read from a TOML file.
//!
//! Every key is optional and maps onto one rotator option:
//!
//! ```toml
//! auto = true
//! interval_ms = 5000
//! duration_ms = 600
//! pause = true
//! z_index_offset = 0
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::options::OptionOverrides;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn parse_overrides(text: &str) -> Result<OptionOverrides, toml::de::Error> {
    toml::from_str(text)
}

pub fn load_overrides(path: &Path) -> Result<OptionOverrides, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let overrides = parse_overrides(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded option overrides from {:?}: {:?}", path, overrides);
    Ok(overrides)
}
