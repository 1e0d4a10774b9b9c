use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Why a sprite could not be loaded.  Never fatal: callers fall back to a
/// placeholder.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite {path} has no visible content")]
    Empty { path: PathBuf },
}
