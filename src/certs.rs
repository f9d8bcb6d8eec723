// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Certificate material handed over by the certificate phase

use crate::error::{KarmadaError, Result};
use std::collections::HashMap;
use std::path::Path;

/// A named certificate and its private key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KarmadaCert {
    pair_name: String,
    cert_data: Vec<u8>,
    key_data: Vec<u8>,
}

impl KarmadaCert {
    pub fn new(pair_name: impl Into<String>, cert_data: Vec<u8>, key_data: Vec<u8>) -> Self {
        Self {
            pair_name: pair_name.into(),
            cert_data,
            key_data,
        }
    }

    /// Load a certificate pair from PEM files. A missing key path yields an empty key.
    pub fn from_files(
        pair_name: impl Into<String>,
        cert_path: &Path,
        key_path: Option<&Path>,
    ) -> Result<Self> {
        let cert_data = read(cert_path)?;
        let key_data = match key_path {
            Some(path) => read(path)?,
            None => Vec::new(),
        };
        Ok(Self::new(pair_name, cert_data, key_data))
    }

    pub fn pair_name(&self) -> &str {
        &self.pair_name
    }

    pub fn cert_data(&self) -> &[u8] {
        &self.cert_data
    }

    pub fn key_data(&self) -> &[u8] {
        &self.key_data
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| KarmadaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Certificates indexed by pair name
#[derive(Debug, Clone, Default)]
pub struct CertStore {
    certs: HashMap<String, KarmadaCert>,
}

impl CertStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cert: KarmadaCert) {
        self.certs.insert(cert.pair_name.clone(), cert);
    }

    pub fn get(&self, pair_name: &str) -> Option<&KarmadaCert> {
        self.certs.get(pair_name)
    }
}

impl FromIterator<KarmadaCert> for CertStore {
    fn from_iter<I: IntoIterator<Item = KarmadaCert>>(iter: I) -> Self {
        let mut store = CertStore::new();
        for cert in iter {
            store.add(cert);
        }
        store
    }
}
