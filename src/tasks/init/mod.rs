// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tasks of the Karmada init workflow and the data they share.

pub mod karmadaresource;

pub use karmadaresource::new_karmada_resources_task;

use crate::certs::{CertStore, KarmadaCert};
use crate::constants::crds::{BASES_DIR, PATCHES_DIR};
use crate::kubernetes::{ControlPlane, KarmadaClient};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything an init task needs. Built once before the workflow starts and
/// only read by the tasks.
#[derive(Clone)]
pub struct InitData {
    pub name: String,
    pub namespace: String,
    pub data_dir: PathBuf,
    pub karmada_version: String,
    pub karmada_client: Arc<dyn KarmadaClient>,
    pub control_plane: Arc<dyn ControlPlane>,
    pub certs: CertStore,
}

impl InitData {
    pub fn get_cert(&self, pair_name: &str) -> Option<&KarmadaCert> {
        self.certs.get(pair_name)
    }

    /// Root of the bundle of the installed version
    pub fn version_dir(&self) -> PathBuf {
        self.data_dir.join(&self.karmada_version)
    }

    pub fn crds_bases_dir(&self) -> PathBuf {
        self.version_dir().join(BASES_DIR)
    }

    pub fn crds_patches_dir(&self) -> PathBuf {
        self.version_dir().join(PATCHES_DIR)
    }
}

/// `namespace/name` of the Karmada instance, for log fields
impl fmt::Display for InitData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
