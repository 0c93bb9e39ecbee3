//! # CNet Network Configuration Store
//!
//! File: cli/src/common/netconf/mod.rs
//!
//! ## Overview
//!
//! This module reads the on-disk network configuration store: the
//! directories containing network definition files (CNI configuration
//! lists). It produces raw [`NetworkRecord`]s for the listing commands.
//!
//! Networks created by CNet carry runtime metadata inside their definition
//! file: a tracked identifier under the top-level `cnetID` key and user
//! labels under `cnetLabels`. Externally defined networks (hand-written or
//! created by other tooling) lack both, and that absence is preserved on
//! the record rather than papered over.
//!
//! ## Architecture
//!
//! The store is a snapshot reader:
//! 1. Each configured directory is scanned for `*.conflist` / `*.conf`
//!    files. Directories that do not exist contribute no records.
//! 2. Files are visited in lexicographic filename order per directory, so
//!    a listing is deterministic across invocations.
//! 3. Each file is parsed as JSON; only `name` and the runtime metadata
//!    keys are interpreted, everything else (plugin configuration, CNI
//!    version) is passed over untouched.
//!
//! Any unreadable or unparseable file fails the whole enumeration; the
//! store never silently drops a definition it could not understand.
//!
use crate::core::error::{CnetError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// One raw network definition, as read from the configuration store.
///
/// `id` and `labels` are `None` for networks that were not created by this
/// runtime; the listing layer renders that absence as empty fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRecord {
    /// Network name from the definition file (required).
    pub name: String,
    /// Runtime-tracked identifier, present only for CNet-created networks.
    pub id: Option<String>,
    /// Runtime-managed labels, present only for CNet-created networks.
    pub labels: Option<HashMap<String, String>>,
    /// Path of the originating definition file.
    pub file: PathBuf,
}

/// The subset of a network definition file the store interprets.
/// Unknown fields (plugins, cniVersion, ...) are deliberately tolerated.
#[derive(Deserialize, Debug)]
struct NetworkDefinition {
    name: String,
    #[serde(rename = "cnetID")]
    id: Option<String>,
    #[serde(rename = "cnetLabels")]
    labels: Option<HashMap<String, String>>,
}

/// File extensions recognized as network definitions.
const DEFINITION_EXTENSIONS: [&str; 2] = ["conflist", "conf"];

/// Read-only handle over the configured network definition directories.
pub struct NetConfStore {
    conf_dirs: Vec<PathBuf>,
}

impl NetConfStore {
    /// Creates a store over the given directories. No I/O happens here;
    /// the directories are only touched by [`NetConfStore::list_networks`].
    pub fn new<I, P>(conf_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            conf_dirs: conf_dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Enumerates all network definitions currently on disk.
    ///
    /// ## Workflow:
    /// 1. For each configured directory (in configuration order), collect
    ///    the definition files and sort them by filename.
    /// 2. Parse each file into a [`NetworkRecord`].
    ///
    /// ## Returns
    ///
    /// * `Result<Vec<NetworkRecord>>`: the snapshot of records, or an `Err`
    ///   (`CnetError::StoreRead`) if a directory entry or file could not be
    ///   read or parsed. A missing directory is not an error; it simply
    ///   holds no networks yet.
    pub fn list_networks(&self) -> Result<Vec<NetworkRecord>> {
        let mut records = Vec::new();
        for dir in &self.conf_dirs {
            if !dir.is_dir() {
                debug!(
                    "Network configuration directory '{}' does not exist; skipping",
                    dir.display()
                );
                continue;
            }
            for file in definition_files(dir)? {
                records.push(read_definition(&file)?);
            }
        }
        debug!("Enumerated {} network definition(s)", records.len());
        Ok(records)
    }
}

/// Collects the definition files in one directory, sorted by filename.
fn definition_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        CnetError::StoreRead(format!("failed to read directory '{}': {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CnetError::StoreRead(format!(
                "failed to read an entry of '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        let is_definition = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| DEFINITION_EXTENSIONS.contains(&ext));
        if is_definition {
            files.push(path);
        } else {
            trace!("Skipping non-definition entry: {}", path.display());
        }
    }

    // Lexicographic filename order keeps listings deterministic.
    files.sort();
    Ok(files)
}

/// Parses a single definition file into a record.
fn read_definition(file: &Path) -> Result<NetworkRecord> {
    let content = fs::read_to_string(file).map_err(|e| {
        CnetError::StoreRead(format!("failed to read '{}': {}", file.display(), e))
    })?;
    let definition: NetworkDefinition = serde_json::from_str(&content).map_err(|e| {
        CnetError::StoreRead(format!(
            "invalid network definition '{}': {}",
            file.display(),
            e
        ))
    })?;
    Ok(NetworkRecord {
        name: definition.name,
        id: definition.id,
        labels: definition.labels,
        file: file.to_path_buf(),
    })
}
