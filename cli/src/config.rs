//! Configuration and state file resolution

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional TOML config file contents
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Where the ledger + registry state lives
    pub state_path: Option<PathBuf>,
}

/// Resolved CLI configuration
pub struct CliConfig {
    pub state_path: PathBuf,
}

impl CliConfig {
    /// Resolve configuration from, in priority order: the `--state` flag,
    /// the `TARN_STATE` environment variable, the config file, and the
    /// default location under the user's home directory.
    pub fn resolve(config_path: Option<PathBuf>, state_override: Option<PathBuf>) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                toml::from_str::<ConfigFile>(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("reading config file {}", path.display()))?;
                    toml::from_str::<ConfigFile>(&raw)
                        .with_context(|| format!("parsing config file {}", path.display()))?
                }
                _ => ConfigFile::default(),
            },
        };

        let state_path = state_override
            .or_else(|| std::env::var_os("TARN_STATE").map(PathBuf::from))
            .or(file.state_path)
            .or_else(default_state_path)
            .context("cannot determine a state file path; pass --state")?;

        Ok(Self { state_path })
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config/tarn/config.toml"))
}

fn default_state_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".local/share/tarn/state.json"))
}
