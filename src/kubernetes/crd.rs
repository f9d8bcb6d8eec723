// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CustomResourceDefinition create and patch utilities

use super::is_already_exists;
use crate::error::{KarmadaError, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{
    api::{Patch, PatchParams, PostParams},
    Api, Client, ResourceExt,
};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Create a CRD unless it is already registered
#[instrument(skip(client, crd), fields(crd = %crd.name_any()))]
pub async fn create_crd_if_absent(client: &Client, crd: &CustomResourceDefinition) -> Result<()> {
    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());

    match crds.create(&PostParams::default(), crd).await {
        Ok(_) => {
            info!("CRD {} created", crd.name_any());
            Ok(())
        }
        Err(e) if is_already_exists(&e) => {
            debug!("CRD {} already exists", crd.name_any());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Strategic-merge patch a CRD with a yaml (or json) document
#[instrument(skip(client, patch))]
pub async fn patch_crd(client: &Client, name: &str, patch: &[u8]) -> Result<()> {
    let value: serde_json::Value =
        serde_yaml::from_slice(patch).map_err(|source| KarmadaError::MalformedManifest {
            path: PathBuf::from(name),
            source,
        })?;

    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());
    crds.patch(name, &PatchParams::default(), &Patch::Strategic(&value))
        .await?;

    info!("CRD {} patched", name);
    Ok(())
}
