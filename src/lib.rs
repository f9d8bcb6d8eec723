// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod certs;
pub mod config;
pub mod constants;
pub mod error;
pub mod karmadaresource;
pub mod kubernetes;
pub mod manifests;
pub mod tasks;
pub mod workflow;

#[cfg(test)]
pub mod test_utils;
