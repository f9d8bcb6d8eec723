// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mutating and validating webhook configurations of karmada-webhook

use crate::error::Result;
use crate::kubernetes::KarmadaClient;
use crate::manifests::{parse_manifest, ManifestRenderer};
use k8s_openapi::api::admissionregistration::v1::{
    MutatingWebhookConfiguration, ValidatingWebhookConfiguration,
};
use minijinja::context;
use std::path::Path;
use tracing::{info, instrument};

const MUTATING_CONFIG: &str = "mutating-config.yaml";
const VALIDATING_CONFIG: &str = "validating-config.yaml";
const MUTATING_CONFIG_TEMPLATE: &str = include_str!("manifests/mutating-config.yaml");
const VALIDATING_CONFIG_TEMPLATE: &str = include_str!("manifests/validating-config.yaml");

/// Name of the karmada-webhook service of an instance
pub fn webhook_service_name(name: &str) -> String {
    format!("{}-webhook", name)
}

fn renderer() -> Result<ManifestRenderer> {
    ManifestRenderer::new()
        .with_template(MUTATING_CONFIG, MUTATING_CONFIG_TEMPLATE)?
        .with_template(VALIDATING_CONFIG, VALIDATING_CONFIG_TEMPLATE)
}

fn render_template(template: &str, namespace: &str, name: &str, ca_bundle: &str) -> Result<String> {
    renderer()?.render(
        template,
        context! {
            service => webhook_service_name(name),
            namespace => namespace,
            caBundle => ca_bundle,
        },
    )
}

/// Build the MutatingWebhookConfiguration pointing at the instance's webhook service
pub fn mutating_webhook_configuration(
    namespace: &str,
    name: &str,
    ca_bundle: &str,
) -> Result<MutatingWebhookConfiguration> {
    let rendered = render_template(MUTATING_CONFIG, namespace, name, ca_bundle)?;
    parse_manifest(Path::new(MUTATING_CONFIG), rendered.as_bytes())
}

/// Build the ValidatingWebhookConfiguration pointing at the instance's webhook service
pub fn validating_webhook_configuration(
    namespace: &str,
    name: &str,
    ca_bundle: &str,
) -> Result<ValidatingWebhookConfiguration> {
    let rendered = render_template(VALIDATING_CONFIG, namespace, name, ca_bundle)?;
    parse_manifest(Path::new(VALIDATING_CONFIG), rendered.as_bytes())
}

/// Create or update both webhook configurations.
/// `ca_bundle` is the base64 encoded CA certificate.
#[instrument(skip(client, ca_bundle))]
pub async fn ensure_webhook_configuration(
    client: &dyn KarmadaClient,
    namespace: &str,
    name: &str,
    ca_bundle: &str,
) -> Result<()> {
    let mutating = mutating_webhook_configuration(namespace, name, ca_bundle)?;
    client
        .apply_mutating_webhook_configuration(&mutating)
        .await
        .map_err(|e| e.context("failed to apply mutating webhook configuration"))?;

    let validating = validating_webhook_configuration(namespace, name, ca_bundle)?;
    client
        .apply_validating_webhook_configuration(&validating)
        .await
        .map_err(|e| e.context("failed to apply validating webhook configuration"))?;

    info!("Webhook configurations for {}/{} applied", namespace, name);
    Ok(())
}
