// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock HTTP service for kube clients and in-memory fakes of
//! the control plane traits.

use crate::error::{KarmadaError, Result};
use crate::kubernetes::{
    poll_until_ready, ApiRegistrationClient, ControlPlane, CrdClient, KarmadaClient, Waiter,
};
use async_trait::async_trait;
use http::{Request, Response};
use k8s_openapi::api::admissionregistration::v1::{
    MutatingWebhookConfiguration, ValidatingWebhookConfiguration,
};
use k8s_openapi::api::core::v1::{Namespace, Service};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::kube_aggregator::pkg::apis::apiregistration::v1::APIService;
use kube::client::Body;
use kube::{Client, ResourceExt};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tower::Service as TowerService;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PATCH requests matching the exact path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    /// Method and path of every request received so far
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl TowerService<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<
            dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>>
                + Send,
        >,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.find_response(&method, &path);
        self.requests.lock().unwrap().push((method, path));

        Box::pin(async move {
            let (status, body) =
                response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a minimal CustomResourceDefinition JSON
pub fn crd_json(name: &str) -> String {
    let (plural, group) = name.split_once('.').unwrap_or((name, "work.karmada.io"));
    serde_json::json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinition",
        "metadata": { "name": name },
        "spec": {
            "group": group,
            "names": { "kind": "Work", "plural": plural },
            "scope": "Namespaced",
            "versions": [{ "name": "v1alpha1", "served": true, "storage": true }]
        }
    })
    .to_string()
}

/// Create an APIService JSON with the given Available condition status
pub fn api_service_json(name: &str, available: &str) -> String {
    serde_json::json!({
        "apiVersion": "apiregistration.k8s.io/v1",
        "kind": "APIService",
        "metadata": { "name": name },
        "spec": { "groupPriorityMinimum": 2000, "versionPriority": 10 },
        "status": {
            "conditions": [{ "type": "Available", "status": available }]
        }
    })
    .to_string()
}

/// Create a failure Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    status_json(
        409,
        "AlreadyExists",
        &format!("{} \"{}\" already exists", resource, name),
    )
}

/// Ordered record of the calls made against the fakes
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
    patches: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    failing: Arc<HashSet<String>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call of `operation` fail after being recorded
    pub fn failing(mut self, operation: &str) -> Self {
        let mut failing = (*self.failing).clone();
        failing.insert(operation.to_string());
        self.failing = Arc::new(failing);
        self
    }

    /// Operations recorded as `operation:target`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Operations only, without their targets
    pub fn operations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| c.split(':').next().unwrap_or_default().to_string())
            .collect()
    }

    /// Bodies sent to `patch_crd`
    pub fn patches(&self) -> Vec<(String, Vec<u8>)> {
        self.patches.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, target: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", operation, target));
        if self.failing.contains(operation) {
            return Err(KarmadaError::ClientConfig(format!("injected {} failure", operation)));
        }
        Ok(())
    }
}

/// Fake general resource client
pub struct FakeKarmadaClient {
    pub log: CallLog,
}

#[async_trait]
impl KarmadaClient for FakeKarmadaClient {
    async fn create_namespace(&self, namespace: &Namespace) -> Result<()> {
        self.log.record("create_namespace", &namespace.name_any())
    }

    async fn apply_mutating_webhook_configuration(
        &self,
        config: &MutatingWebhookConfiguration,
    ) -> Result<()> {
        self.log.record("apply_mutating_webhook", &config.name_any())
    }

    async fn apply_validating_webhook_configuration(
        &self,
        config: &ValidatingWebhookConfiguration,
    ) -> Result<()> {
        self.log.record("apply_validating_webhook", &config.name_any())
    }

    async fn apply_service(&self, service: &Service) -> Result<()> {
        self.log.record("apply_service", &service.name_any())
    }
}

/// Fake control plane connection; its clients share one call log
pub struct FakeControlPlane {
    pub log: CallLog,
    /// Whether the fake waiter's target ever reports ready
    pub api_service_ready: bool,
    /// Replaces the timeout requested by the caller, to keep tests short
    pub wait_timeout: Duration,
}

impl FakeControlPlane {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            api_service_ready: true,
            wait_timeout: Duration::from_millis(50),
        }
    }
}

struct FakeCrdClient {
    log: CallLog,
}

#[async_trait]
impl CrdClient for FakeCrdClient {
    async fn create_crd_if_absent(&self, crd: &CustomResourceDefinition) -> Result<()> {
        self.log.record("create_crd", &crd.name_any())
    }

    async fn patch_crd(&self, name: &str, patch: &[u8]) -> Result<()> {
        self.log
            .patches
            .lock()
            .unwrap()
            .push((name.to_string(), patch.to_vec()));
        self.log.record("patch_crd", name)
    }
}

struct FakeApiRegistrationClient {
    log: CallLog,
}

#[async_trait]
impl ApiRegistrationClient for FakeApiRegistrationClient {
    async fn apply_api_service(&self, api_service: &APIService) -> Result<()> {
        self.log.record("apply_api_service", &api_service.name_any())
    }
}

struct FakeWaiter {
    log: CallLog,
    ready: bool,
    timeout: Duration,
}

#[async_trait]
impl Waiter for FakeWaiter {
    async fn wait_for_api_service(&self, name: &str) -> Result<()> {
        self.log.record("wait_api_service", name)?;
        let ready = self.ready;
        poll_until_ready(name, Duration::from_millis(5), self.timeout, || async move {
            Ok::<_, KarmadaError>(ready)
        })
        .await
    }
}

impl ControlPlane for FakeControlPlane {
    fn crds_client(&self) -> Result<Box<dyn CrdClient>> {
        self.log.record("crds_client", "")?;
        Ok(Box::new(FakeCrdClient {
            log: self.log.clone(),
        }))
    }

    fn api_registration_client(&self) -> Result<Box<dyn ApiRegistrationClient>> {
        self.log.record("api_registration_client", "")?;
        Ok(Box::new(FakeApiRegistrationClient {
            log: self.log.clone(),
        }))
    }

    /// Records the requested bound; the poll itself uses `wait_timeout`
    fn waiter(&self, timeout: Duration) -> Result<Box<dyn Waiter>> {
        self.log.record("waiter", &format!("{:?}", timeout))?;
        Ok(Box::new(FakeWaiter {
            log: self.log.clone(),
            ready: self.api_service_ready,
            timeout: self.wait_timeout,
        }))
    }
}
