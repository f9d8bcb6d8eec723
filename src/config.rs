// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::certs::{CertStore, KarmadaCert};
use crate::constants::CA_CERT_AND_KEY_NAME;

const DEFAULT_NAME: &str = "karmada";
const DEFAULT_NAMESPACE: &str = "karmada-system";
const DEFAULT_DATA_DIR: &str = "/var/lib/karmada";

/// Installer configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the Karmada instance, used to scope webhook and service names
    pub name: String,
    /// Namespace the Karmada system components live in
    pub namespace: String,
    /// Root of the unpacked Karmada bundles
    pub data_dir: PathBuf,
    /// Installed Karmada version, the bundle directory under `data_dir`
    pub karmada_version: String,
    pub ca_cert_file: PathBuf,
    pub ca_key_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let karmada_version = lookup("KARMADA_VERSION")
            .context("KARMADA_VERSION environment variable not set")?;
        let ca_cert_file = lookup("KARMADA_CA_CERT_FILE")
            .context("KARMADA_CA_CERT_FILE environment variable not set")?;

        Ok(Config {
            name: lookup("KARMADA_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string()),
            namespace: lookup("KARMADA_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            data_dir: lookup("KARMADA_DATA_DIR")
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
                .into(),
            karmada_version,
            ca_cert_file: ca_cert_file.into(),
            ca_key_file: lookup("KARMADA_CA_KEY_FILE").map(PathBuf::from),
        })
    }

    /// Read the certificates this phase consumes
    pub fn load_certs(&self) -> Result<CertStore> {
        let ca = KarmadaCert::from_files(
            CA_CERT_AND_KEY_NAME,
            &self.ca_cert_file,
            self.ca_key_file.as_deref(),
        )
        .context("failed to load the Karmada CA certificate")?;

        Ok([ca].into_iter().collect())
    }
}
