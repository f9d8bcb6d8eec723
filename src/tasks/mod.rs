// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Installation workflow tasks.

pub mod init;

pub use init::{new_karmada_resources_task, InitData};
