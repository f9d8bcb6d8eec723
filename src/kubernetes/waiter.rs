// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded readiness polling

use super::Waiter;
use crate::constants::wait::POLL_INTERVAL_SECS;
use crate::error::{KarmadaError, Result};
use async_trait::async_trait;
use k8s_openapi::kube_aggregator::pkg::apis::apiregistration::v1::APIService;
use kube::{Api, Client};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, instrument, warn};

/// Probe `target` every `interval` until it reports ready.
/// Probe errors are logged and retried; the whole wait never exceeds `limit`.
pub async fn poll_until_ready<F, Fut>(
    target: &str,
    interval: Duration,
    limit: Duration,
    mut probe: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let poll = async {
        loop {
            match probe().await {
                Ok(true) => return,
                Ok(false) => debug!("{} is not ready yet", target),
                Err(e) => warn!("Error checking {}: {}, retrying", target, e),
            }
            sleep(interval).await;
        }
    };

    timeout(limit, poll)
        .await
        .map_err(|_| KarmadaError::ReadinessTimeout {
            target: target.to_string(),
            timeout: limit,
        })
}

/// Check if an APIService reports Available=True
pub fn is_api_service_available(api_service: &APIService) -> bool {
    api_service
        .status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|c| c.type_ == "Available" && c.status == "True")
        })
}

/// Waits on resources of the Karmada control plane
pub struct KubeWaiter {
    client: Client,
    interval: Duration,
    timeout: Duration,
}

impl KubeWaiter {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            interval: Duration::from_secs(POLL_INTERVAL_SECS),
            timeout,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[async_trait]
impl Waiter for KubeWaiter {
    #[instrument(skip(self))]
    async fn wait_for_api_service(&self, name: &str) -> Result<()> {
        let api_services: Api<APIService> = Api::all(self.client.clone());

        poll_until_ready(name, self.interval, self.timeout, || async {
            let api_service = api_services.get(name).await?;
            Ok::<_, KarmadaError>(is_api_service_available(&api_service))
        })
        .await?;

        info!("APIService {} is available", name);
        Ok(())
    }
}
