// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::storage::project_dirs;

/// Local settings: the profile marker that flips the session gate to
/// authenticated mode, and the advice-service API key. The `API_KEY`
/// environment variable always wins over the stored key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub profile: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn api_key(&self) -> Option<String> {
        std::env::var("API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = project_dirs()?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("config.json"))
}

pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("Parse config at {}", path.display()))?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    let path = config_path()?;
    fs::write(&path, serde_json::to_string_pretty(config)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
