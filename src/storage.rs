// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence shell for authenticated mode: `load()` hands back the three
//! collections, `save()` writes them out. The core never calls into this
//! module; demo mode never touches the filesystem at all.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::Snapshot;
use crate::seed;
use crate::store::Store;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "FinancePro", "financepro"));

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2).context("Could not determine platform-specific data dir")
}

pub fn ledger_path() -> Result<PathBuf> {
    let proj = project_dirs()?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ledger.json"))
}

/// The saved collections, or `None` when nothing has been saved yet.
pub fn load() -> Result<Option<Snapshot>> {
    load_from(&ledger_path()?)
}

pub fn load_from(path: &Path) -> Result<Option<Snapshot>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("Read ledger at {}", path.display()))?;
    let snapshot =
        serde_json::from_str(&raw).with_context(|| format!("Parse ledger at {}", path.display()))?;
    Ok(Some(snapshot))
}

pub fn save(snapshot: &Snapshot) -> Result<()> {
    save_to(&ledger_path()?, snapshot)
}

pub fn save_to(path: &Path, snapshot: &Snapshot) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(snapshot)?)
        .with_context(|| format!("Write ledger at {}", path.display()))?;
    debug!(
        accounts = snapshot.accounts.len(),
        transactions = snapshot.transactions.len(),
        "ledger saved"
    );
    Ok(())
}

/// Store for authenticated mode: the saved ledger if one exists, otherwise
/// an empty ledger over the built-in categories.
pub fn open_ledger() -> Result<Store> {
    match load()? {
        Some(snapshot) => Ok(Store::from_snapshot(snapshot)),
        None => Ok(Store::new(seed::categories())),
    }
}
