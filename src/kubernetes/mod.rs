// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes clients for the Karmada control plane: namespace and CRD
//! management, server-side apply of webhook and APIService resources, and
//! readiness waiting.

pub mod apply;
pub mod client;
pub mod crd;
pub mod namespaces;
pub mod waiter;

pub use client::{KubeClient, KubeControlPlane};
pub use waiter::{poll_until_ready, KubeWaiter};

use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::admissionregistration::v1::{
    MutatingWebhookConfiguration, ValidatingWebhookConfiguration,
};
use k8s_openapi::api::core::v1::{Namespace, Service};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::kube_aggregator::pkg::apis::apiregistration::v1::APIService;
use std::time::Duration;

/// General resource operations against the Karmada apiserver
#[async_trait]
pub trait KarmadaClient: Send + Sync {
    /// Create a namespace; an existing namespace is not an error
    async fn create_namespace(&self, namespace: &Namespace) -> Result<()>;

    async fn apply_mutating_webhook_configuration(
        &self,
        config: &MutatingWebhookConfiguration,
    ) -> Result<()>;

    async fn apply_validating_webhook_configuration(
        &self,
        config: &ValidatingWebhookConfiguration,
    ) -> Result<()>;

    async fn apply_service(&self, service: &Service) -> Result<()>;
}

/// CustomResourceDefinition operations
#[async_trait]
pub trait CrdClient: Send + Sync {
    /// Create a CRD; an existing CRD is not an error
    async fn create_crd_if_absent(&self, crd: &CustomResourceDefinition) -> Result<()>;

    /// Patch the named CRD with a yaml or json document
    async fn patch_crd(&self, name: &str, patch: &[u8]) -> Result<()>;
}

/// APIService registration
#[async_trait]
pub trait ApiRegistrationClient: Send + Sync {
    async fn apply_api_service(&self, api_service: &APIService) -> Result<()>;
}

/// Waits for control plane resources to become healthy
#[async_trait]
pub trait Waiter: Send + Sync {
    async fn wait_for_api_service(&self, name: &str) -> Result<()>;
}

/// The connection to a Karmada control plane, building the clients a step needs
pub trait ControlPlane: Send + Sync {
    fn crds_client(&self) -> Result<Box<dyn CrdClient>>;

    fn api_registration_client(&self) -> Result<Box<dyn ApiRegistrationClient>>;

    fn waiter(&self, timeout: Duration) -> Result<Box<dyn Waiter>>;
}

/// Check whether a create was rejected because the object already exists
pub fn is_already_exists(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 409)
}
