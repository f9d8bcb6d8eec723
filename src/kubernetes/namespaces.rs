// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use super::is_already_exists;
use crate::error::Result;
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::PostParams, Api, Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Create a namespace in the cluster, tolerating one that already exists
#[instrument(skip(client, namespace), fields(namespace = %namespace.name_any()))]
pub async fn create_namespace(client: &Client, namespace: &Namespace) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let name = namespace.name_any();

    match namespaces.create(&PostParams::default(), namespace).await {
        Ok(_) => {
            info!("Namespace {} created successfully", name);
            Ok(())
        }
        Err(e) if is_already_exists(&e) => {
            debug!("Namespace {} already exists", name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
