// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;

/// The field manager name used for server-side apply
pub const FIELD_MANAGER: &str = "karmada-operator";

/// Certificate slot holding the Karmada CA
pub const CA_CERT_AND_KEY_NAME: &str = "ca";

/// Aggregated APIService served by karmada-aggregated-apiserver
pub const APISERVICE_NAME: &str = "v1alpha1.cluster.karmada.io";

/// How long a control plane component may take to become ready
pub const COMPONENT_READY_TIMEOUT: Duration = Duration::from_secs(120);

/// Task names of the KarmadaResources phase, in execution order
pub mod tasks {
    pub const KARMADA_RESOURCES: &str = "KarmadaResources";
    pub const SYSTEM_NAMESPACE: &str = "systemNamespace";
    pub const CRDS: &str = "crds";
    pub const WEBHOOK_CONFIGURATION: &str = "WebhookConfiguration";
    pub const API_SERVICE: &str = "APIService";
}

/// On-disk CRD bundle layout, relative to `<data dir>/<version>`
pub mod crds {
    pub const BASES_DIR: &str = "crds/bases";
    pub const PATCHES_DIR: &str = "crds/patches";
    /// Only files with this extension are loaded
    pub const MANIFEST_EXTENSION: &str = "yaml";
    /// Placeholder replaced with the base64 CA in patch files
    pub const CA_BUNDLE_PLACEHOLDER: &str = "{{caBundle}}";
    /// Appended to the resource name derived from a patch file name
    pub const CRD_NAME_SUFFIX: &str = ".work.karmada.io";
}

/// Readiness polling
pub mod wait {
    /// Interval between two readiness probes
    pub const POLL_INTERVAL_SECS: u64 = 2;
}
