// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side apply helpers

use crate::constants::FIELD_MANAGER;
use crate::error::Result;
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{Patch, PatchParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{info, instrument};

/// Create or update a cluster scoped resource
#[instrument(skip(client, resource), fields(name = %resource.name_any()))]
pub async fn apply_cluster_resource<K>(client: &Client, resource: &K) -> Result<()>
where
    K: Resource + Clone + DeserializeOwned + Serialize + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = Api::all(client.clone());
    let name = resource.name_any();
    api.patch(
        &name,
        &PatchParams::apply(FIELD_MANAGER).force(),
        &Patch::Apply(resource),
    )
    .await?;

    info!("Applied {} {}", K::kind(&Default::default()), name);
    Ok(())
}

/// Create or update a namespaced resource in its own namespace
#[instrument(skip(client, resource), fields(name = %resource.name_any()))]
pub async fn apply_namespaced_resource<K>(client: &Client, resource: &K) -> Result<()>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Serialize + Debug,
    <K as Resource>::DynamicType: Default,
{
    let namespace = resource.namespace().unwrap_or_else(|| "default".to_string());
    let api: Api<K> = Api::namespaced(client.clone(), &namespace);
    let name = resource.name_any();
    api.patch(
        &name,
        &PatchParams::apply(FIELD_MANAGER).force(),
        &Patch::Apply(resource),
    )
    .await?;

    info!("Applied {} {}/{}", K::kind(&Default::default()), namespace, name);
    Ok(())
}
