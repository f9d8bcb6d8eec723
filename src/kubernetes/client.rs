// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! kube-rs backed implementations of the control plane client traits

use super::apply::{apply_cluster_resource, apply_namespaced_resource};
use super::{
    crd, namespaces, ApiRegistrationClient, ControlPlane, CrdClient, KarmadaClient, KubeWaiter,
    Waiter,
};
use crate::error::{KarmadaError, Result};
use async_trait::async_trait;
use k8s_openapi::api::admissionregistration::v1::{
    MutatingWebhookConfiguration, ValidatingWebhookConfiguration,
};
use k8s_openapi::api::core::v1::{Namespace, Service};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::kube_aggregator::pkg::apis::apiregistration::v1::APIService;
use kube::{Client, Config as KConfig};
use std::time::Duration;
use tracing::debug;

/// A Karmada apiserver client
#[derive(Clone)]
pub struct KubeClient {
    client: Client,
}

impl KubeClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a connection config
    pub fn try_from_config(config: KConfig) -> Result<Self> {
        debug!("Creating client for {}", config.cluster_url);
        Client::try_from(config)
            .map(Self::new)
            .map_err(|e| KarmadaError::ClientConfig(format!("Failed to create client: {}", e)))
    }
}

#[async_trait]
impl KarmadaClient for KubeClient {
    async fn create_namespace(&self, namespace: &Namespace) -> Result<()> {
        namespaces::create_namespace(&self.client, namespace).await
    }

    async fn apply_mutating_webhook_configuration(
        &self,
        config: &MutatingWebhookConfiguration,
    ) -> Result<()> {
        apply_cluster_resource(&self.client, config).await
    }

    async fn apply_validating_webhook_configuration(
        &self,
        config: &ValidatingWebhookConfiguration,
    ) -> Result<()> {
        apply_cluster_resource(&self.client, config).await
    }

    async fn apply_service(&self, service: &Service) -> Result<()> {
        apply_namespaced_resource(&self.client, service).await
    }
}

#[async_trait]
impl CrdClient for KubeClient {
    async fn create_crd_if_absent(&self, crd: &CustomResourceDefinition) -> Result<()> {
        crd::create_crd_if_absent(&self.client, crd).await
    }

    async fn patch_crd(&self, name: &str, patch: &[u8]) -> Result<()> {
        crd::patch_crd(&self.client, name, patch).await
    }
}

#[async_trait]
impl ApiRegistrationClient for KubeClient {
    async fn apply_api_service(&self, api_service: &APIService) -> Result<()> {
        apply_cluster_resource(&self.client, api_service).await
    }
}

/// Connection to a Karmada control plane; every client is built from the same config
#[derive(Clone)]
pub struct KubeControlPlane {
    config: KConfig,
}

impl KubeControlPlane {
    pub fn new(config: KConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> Result<KubeClient> {
        KubeClient::try_from_config(self.config.clone())
    }
}

impl ControlPlane for KubeControlPlane {
    fn crds_client(&self) -> Result<Box<dyn CrdClient>> {
        Ok(Box::new(self.client()?))
    }

    fn api_registration_client(&self) -> Result<Box<dyn ApiRegistrationClient>> {
        Ok(Box::new(self.client()?))
    }

    fn waiter(&self, timeout: Duration) -> Result<Box<dyn Waiter>> {
        let client = self.client()?;
        Ok(Box::new(KubeWaiter::new(client.client, timeout)))
    }
}
