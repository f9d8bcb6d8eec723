// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use karmada_init::config::Config;
use karmada_init::kubernetes::{KubeClient, KubeControlPlane};
use karmada_init::tasks::{new_karmada_resources_task, InitData};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: name={}, namespace={}, version={}",
        config.name, config.namespace, config.karmada_version
    );
    let certs = config.load_certs()?;

    // Connection to the Karmada control plane
    let kube_config = kube::Config::infer().await?;
    let karmada_client = KubeClient::try_from_config(kube_config.clone())?;
    info!("Connected to Karmada control plane at {}", kube_config.cluster_url);

    let data = InitData {
        name: config.name,
        namespace: config.namespace,
        data_dir: config.data_dir,
        karmada_version: config.karmada_version,
        karmada_client: Arc::new(karmada_client),
        control_plane: Arc::new(KubeControlPlane::new(kube_config)),
        certs,
    };

    let task = new_karmada_resources_task();
    info!("Running {} task: {:?}", task.name, task.sub_task_names());
    task.run(&data).await?;

    info!("Karmada resources installed for {}", data);
    Ok(())
}
