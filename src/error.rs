// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KarmadaError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to build control plane client: {0}")]
    ClientConfig(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest {}: {source}", path.display())]
    MalformedManifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to render template {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("unexpected empty {0} cert data")]
    MissingCert(String),

    #[error("timed out after {timeout:?} waiting for {target} to become ready")]
    ReadinessTimeout { target: String, timeout: Duration },

    #[error("{context}: {source}")]
    Operation {
        context: String,
        #[source]
        source: Box<KarmadaError>,
    },

    #[error("task {task} failed: {source}")]
    TaskFailed {
        task: String,
        #[source]
        source: Box<KarmadaError>,
    },
}

impl KarmadaError {
    /// Wrap this error with a message naming the failed operation
    pub fn context(self, context: impl Into<String>) -> Self {
        KarmadaError::Operation {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping `Operation` and `TaskFailed` wrappers
    pub fn root_cause(&self) -> &KarmadaError {
        match self {
            KarmadaError::Operation { source, .. } | KarmadaError::TaskFailed { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, KarmadaError>;
