// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Karmada control plane resources built in code or from embedded templates.

pub mod apiservice;
pub mod webhookconfiguration;

pub use apiservice::ensure_aggregated_api_service;
pub use webhookconfiguration::ensure_webhook_configuration;
