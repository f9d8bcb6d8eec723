// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loading of declarative manifest bundles from disk.

pub mod template;

pub use template::{replace_yaml_for_template, substitute, ManifestRenderer};

use crate::constants::crds::{CRD_NAME_SUFFIX, MANIFEST_EXTENSION};
use crate::error::{KarmadaError, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A directory entry of a manifest bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl ManifestFile {
    /// A regular file carrying the manifest extension
    pub fn is_yaml_manifest(&self) -> bool {
        !self.is_dir
            && Path::new(&self.name)
                .extension()
                .is_some_and(|ext| ext == MANIFEST_EXTENSION)
    }
}

/// List the entries of a directory, sorted by file name.
/// A directory that cannot be opened is logged and listed as empty.
pub fn list_files(dir: &Path) -> Result<Vec<ManifestFile>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Unable to list {}: {}", dir.display(), e);
            return Ok(Vec::new());
        }
    };

    let io_err = |source| KarmadaError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(io_err)?;
        let is_dir = entry.file_type().map_err(io_err)?.is_dir();
        files.push(ManifestFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_dir,
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(files)
}

/// List only the yaml manifests of a directory
pub fn yaml_manifests(dir: &Path) -> Result<Vec<ManifestFile>> {
    let files: Vec<ManifestFile> = list_files(dir)?
        .into_iter()
        .filter(ManifestFile::is_yaml_manifest)
        .collect();
    debug!("Found {} manifests in {}", files.len(), dir.display());
    Ok(files)
}

/// Read the raw bytes of a manifest
pub fn read_raw(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| KarmadaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a manifest as text
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| KarmadaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a yaml manifest into a typed object
pub fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = read_raw(path)?;
    parse_manifest(path, &bytes)
}

/// Parse yaml bytes that came from `path`
pub fn parse_manifest<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T> {
    serde_yaml::from_slice(bytes).map_err(|source| KarmadaError::MalformedManifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract the text between the last `start` and the following `end`.
///
/// Without `start` the whole name is used. The cut at `end` is only made when
/// it is not the first character of the remainder.
pub fn split_resource_name(file_name: &str, start: char, end: char) -> &str {
    let name = match file_name.rfind(start) {
        Some(idx) => &file_name[idx + start.len_utf8()..],
        None => file_name,
    };
    match name.find(end) {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Derive the CRD a patch file targets, e.g.
/// `webhook_in_resourcebindings.yaml` -> `resourcebindings.work.karmada.io`
pub fn crd_name_from_file(file_name: &str) -> String {
    format!("{}{}", split_resource_name(file_name, '_', '.'), CRD_NAME_SUFFIX)
}
