//! Persisted engine state
//!
//! The registry and the in-memory ledger serialize to one JSON document so
//! consecutive CLI invocations see the same world. Every command loads the
//! store, runs exactly one pool operation, and saves on success; a failed
//! operation leaves the file untouched, matching the engine's all-or-nothing
//! semantics.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use tarn_pool::{InMemoryLedger, PoolRegistry};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    pub registry: PoolRegistry,
    pub ledger: InMemoryLedger,
}

impl Store {
    /// Load the store, starting empty when the file does not exist yet
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading state file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing state file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating state directory {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("serializing state")?;
        fs::write(path, raw).with_context(|| format!("writing state file {}", path.display()))
    }
}
