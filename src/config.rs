use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Default port of the HTTP API.
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address of the HTTP API.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy; CLI flags
/// override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// WordNet `dict` directory. None means the bundled lexicon.
    pub wordnet_dir: Option<PathBuf>,
    /// Address the HTTP API binds to (PLAGISCAN_BIND)
    pub bind: String,
    /// Port the HTTP API listens on (PLAGISCAN_PORT)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// WORDNET_DIR wins when set. Otherwise a WordNet install in the
    /// platform data directory is picked up if present, and the bundled
    /// lexicon is used when there is none.
    pub fn load() -> Result<Self> {
        let wordnet_dir = match env::var("WORDNET_DIR") {
            Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => {
                let default = default_wordnet_dir();
                wordnet_present(&default).then_some(default)
            }
        };

        let port = match env::var("PLAGISCAN_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("PLAGISCAN_PORT must be a port number, got {raw:?}")
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            wordnet_dir,
            bind: env::var("PLAGISCAN_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            port,
        })
    }
}

/// Returns the default directory searched for a WordNet install.
/// Uses the platform data directory: ~/.local/share/plagiscan/wordnet/ on Linux.
pub fn default_wordnet_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plagiscan")
        .join("wordnet")
}

/// Check whether a directory looks like a WordNet `dict` directory.
pub fn wordnet_present(dir: &Path) -> bool {
    dir.join("index.noun").exists() && dir.join("data.noun").exists()
}
