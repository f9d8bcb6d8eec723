// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Aggregated APIService registration for karmada-aggregated-apiserver

use crate::constants::APISERVICE_NAME;
use crate::error::Result;
use crate::kubernetes::{ApiRegistrationClient, KarmadaClient};
use k8s_openapi::api::core::v1::{Service, ServiceSpec};
use k8s_openapi::kube_aggregator::pkg::apis::apiregistration::v1::{
    APIService, APIServiceSpec, ServiceReference,
};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::{info, instrument};

const AGGREGATED_API_GROUP: &str = "cluster.karmada.io";
const AGGREGATED_API_VERSION: &str = "v1alpha1";

/// Name of the karmada-aggregated-apiserver service of an instance
pub fn aggregated_apiserver_name(name: &str) -> String {
    format!("{}-aggregated-apiserver", name)
}

/// ExternalName service inside the Karmada control plane that forwards to
/// the aggregated apiserver running in the host cluster
pub fn aggregated_apiserver_service(name: &str, namespace: &str) -> Service {
    let service_name = aggregated_apiserver_name(name);
    Service {
        metadata: ObjectMeta {
            name: Some(service_name.clone()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            type_: Some("ExternalName".to_string()),
            external_name: Some(format!("{}.{}.svc", service_name, namespace)),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// APIService routing `cluster.karmada.io/v1alpha1` to the aggregated apiserver
pub fn aggregated_api_service(name: &str, namespace: &str) -> APIService {
    APIService {
        metadata: ObjectMeta {
            name: Some(APISERVICE_NAME.to_string()),
            labels: Some(BTreeMap::from([
                ("app".to_string(), "karmada-aggregated-apiserver".to_string()),
                ("apiserver".to_string(), "true".to_string()),
            ])),
            ..Default::default()
        },
        spec: Some(APIServiceSpec {
            group: Some(AGGREGATED_API_GROUP.to_string()),
            version: Some(AGGREGATED_API_VERSION.to_string()),
            group_priority_minimum: 2000,
            version_priority: 10,
            insecure_skip_tls_verify: Some(true),
            service: Some(ServiceReference {
                name: Some(aggregated_apiserver_name(name)),
                namespace: Some(namespace.to_string()),
                port: Some(443),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Register the aggregated APIService and the service it routes to
#[instrument(skip(api_registration, karmada))]
pub async fn ensure_aggregated_api_service(
    api_registration: &dyn ApiRegistrationClient,
    karmada: &dyn KarmadaClient,
    name: &str,
    namespace: &str,
) -> Result<()> {
    karmada
        .apply_service(&aggregated_apiserver_service(name, namespace))
        .await
        .map_err(|e| e.context("failed to apply aggregated apiserver service"))?;

    api_registration
        .apply_api_service(&aggregated_api_service(name, namespace))
        .await
        .map_err(|e| e.context(format!("failed to apply APIService {}", APISERVICE_NAME)))?;

    info!("APIService {} registered", APISERVICE_NAME);
    Ok(())
}
