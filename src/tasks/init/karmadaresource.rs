// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The KarmadaResources task: system namespace, CRDs, webhook configurations
//! and the aggregated APIService of a new Karmada control plane.

use super::InitData;
use crate::constants::crds::CA_BUNDLE_PLACEHOLDER;
use crate::constants::{tasks, APISERVICE_NAME, CA_CERT_AND_KEY_NAME, COMPONENT_READY_TIMEOUT};
use crate::error::{KarmadaError, Result};
use crate::karmadaresource::{ensure_aggregated_api_service, ensure_webhook_configuration};
use crate::kubernetes::CrdClient;
use crate::manifests::{self, crd_name_from_file, replace_yaml_for_template};
use crate::workflow::Task;
use base64::{engine::general_purpose::STANDARD, Engine};
use futures::future::{BoxFuture, FutureExt};
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::ObjectMeta;
use std::path::Path;
use tracing::{debug, info};

/// Build the KarmadaResources task and its sub tasks
pub fn new_karmada_resources_task() -> Task<InitData> {
    Task::new(tasks::KARMADA_RESOURCES, run_karmada_resources).with_sub_tasks(vec![
        Task::new(tasks::SYSTEM_NAMESPACE, run_system_namespace),
        Task::new(tasks::CRDS, run_crds),
        Task::new(tasks::WEBHOOK_CONFIGURATION, run_webhook_configuration),
        Task::new(tasks::API_SERVICE, run_api_service),
    ])
}

fn run_karmada_resources(data: &InitData) -> BoxFuture<'_, Result<()>> {
    async move {
        debug!(karmada = %data, "[karmadaResources] Running karmadaResources task");
        Ok(())
    }
    .boxed()
}

fn run_system_namespace(data: &InitData) -> BoxFuture<'_, Result<()>> {
    system_namespace(data).boxed()
}

fn run_crds(data: &InitData) -> BoxFuture<'_, Result<()>> {
    crds(data).boxed()
}

fn run_webhook_configuration(data: &InitData) -> BoxFuture<'_, Result<()>> {
    webhook_configuration(data).boxed()
}

fn run_api_service(data: &InitData) -> BoxFuture<'_, Result<()>> {
    api_service(data).boxed()
}

async fn system_namespace(data: &InitData) -> Result<()> {
    let namespace = Namespace {
        metadata: ObjectMeta {
            name: Some(data.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    };

    data.karmada_client
        .create_namespace(&namespace)
        .await
        .map_err(|e| e.context(format!("failed to create namespace {}", data.namespace)))?;

    info!(
        namespace = %data.namespace,
        karmada = %data,
        "[systemNamespace] Successfully created karmada system namespace"
    );
    Ok(())
}

async fn crds(data: &InitData) -> Result<()> {
    let crds_client = data.control_plane.crds_client()?;

    create_crds(crds_client.as_ref(), &data.crds_bases_dir())
        .await
        .map_err(|e| e.context("failed to create karmada crds"))?;

    let ca_bundle = ca_bundle(data)?;
    patch_crds(crds_client.as_ref(), &data.crds_patches_dir(), &ca_bundle)
        .await
        .map_err(|e| e.context("failed to patch karmada crds"))?;

    info!(karmada = %data, "[crds] Successfully applied karmada crds resource");
    Ok(())
}

/// Create every CRD of the bases directory. A malformed file aborts before
/// any later file is created.
pub async fn create_crds(client: &dyn CrdClient, crds_path: &Path) -> Result<()> {
    for file in manifests::yaml_manifests(crds_path)? {
        let crd: CustomResourceDefinition = manifests::read_manifest(&file.path)?;
        client
            .create_crd_if_absent(&crd)
            .await
            .map_err(|e| e.context(format!("failed to create crd from {}", file.path.display())))?;
    }
    Ok(())
}

/// Patch the CRD each file of the patches directory names, with the CA
/// bundle substituted into the file
pub async fn patch_crds(client: &dyn CrdClient, patch_path: &Path, ca_bundle: &str) -> Result<()> {
    for file in manifests::yaml_manifests(patch_path)? {
        let patch = replace_yaml_for_template(&file.path, ca_bundle, CA_BUNDLE_PLACEHOLDER)?;
        let name = crd_name_from_file(&file.name);
        client
            .patch_crd(&name, &patch)
            .await
            .map_err(|e| e.context(format!("failed to patch crd {}", name)))?;
    }
    Ok(())
}

/// Base64 encoded CA certificate
fn ca_bundle(data: &InitData) -> Result<String> {
    let cert = data
        .get_cert(CA_CERT_AND_KEY_NAME)
        .filter(|cert| !cert.cert_data().is_empty())
        .ok_or_else(|| KarmadaError::MissingCert(CA_CERT_AND_KEY_NAME.to_string()))?;

    Ok(STANDARD.encode(cert.cert_data()))
}

async fn webhook_configuration(data: &InitData) -> Result<()> {
    let ca_bundle = ca_bundle(data)?;

    ensure_webhook_configuration(
        data.karmada_client.as_ref(),
        &data.namespace,
        &data.name,
        &ca_bundle,
    )
    .await
    .map_err(|e| e.context("failed to apply karmada webhook configuration"))?;

    info!(
        karmada = %data,
        "[webhookConfiguration] Successfully applied karmada webhook configuration"
    );
    Ok(())
}

async fn api_service(data: &InitData) -> Result<()> {
    let client = data.control_plane.api_registration_client()?;

    ensure_aggregated_api_service(
        client.as_ref(),
        data.karmada_client.as_ref(),
        &data.name,
        &data.namespace,
    )
    .await
    .map_err(|e| {
        e.context("failed to apply aggregated APIService resource to karmada controlplane")
    })?;

    let waiter = data.control_plane.waiter(COMPONENT_READY_TIMEOUT)?;
    waiter
        .wait_for_api_service(APISERVICE_NAME)
        .await
        .map_err(|e| e.context("the APIService is unhealthy"))?;

    info!(karmada = %data, "[APIService] Aggregated APIService status is ready");
    Ok(())
}
