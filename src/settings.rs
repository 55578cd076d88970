use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cooldown::CooldownConfig;

/// Product thresholds that tests and operators may tune.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductLimits {
    pub cooldown: CooldownConfig,
    /// Entries needed before pattern insights unlock.
    pub patterns_unlock_entries: u32,
}

impl Default for ProductLimits {
    fn default() -> Self {
        Self {
            cooldown: CooldownConfig::default(),
            patterns_unlock_entries: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredSettings {
    limits: ProductLimits,
}

/// Settings loaded once at startup from `settings.json`.
pub struct SettingsStore {
    path: PathBuf,
    limits: ProductLimits,
}

impl SettingsStore {
    /// Load settings from `path`, writing defaults when the file does not exist yet.
    pub fn new(path: PathBuf) -> Result<Self> {
        let stored: StoredSettings = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(
                    "Ignoring invalid settings file {}: {err}",
                    path.display()
                );
                StoredSettings::default()
            })
        } else {
            let defaults = StoredSettings::default();
            persist(&path, &defaults)?;
            defaults
        };

        Ok(Self {
            path,
            limits: stored.limits,
        })
    }

    pub fn limits(&self) -> ProductLimits {
        self.limits
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

fn persist(path: &Path, data: &StoredSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
    }
    let serialized = serde_json::to_string_pretty(data)?;
    fs::write(path, serialized)
        .with_context(|| format!("Failed to write settings to {}", path.display()))
}
