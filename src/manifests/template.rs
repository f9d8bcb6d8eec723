// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest templating.
//!
//! Embedded manifests are jinja templates rendered with strict undefined
//! handling. Patch files from a bundle only get a literal placeholder swap.

use super::read_text;
use crate::error::{KarmadaError, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::path::Path;

/// Renders named manifest templates
pub struct ManifestRenderer {
    env: Environment<'static>,
}

impl Default for ManifestRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // yaml output, never escaped
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Register a template under `name`
    pub fn with_template(mut self, name: &'static str, source: &'static str) -> Result<Self> {
        self.env
            .add_template(name, source)
            .map_err(|source| KarmadaError::Template {
                name: name.to_string(),
                source,
            })?;
        Ok(self)
    }

    /// Render the template `name`. Every variable it references must be in `ctx`.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let template_err = |source| KarmadaError::Template {
            name: name.to_string(),
            source,
        };
        self.env
            .get_template(name)
            .map_err(template_err)?
            .render(ctx)
            .map_err(template_err)
    }
}

/// Replace every literal occurrence of `placeholder` in `content` with `value`
pub fn substitute(content: &str, placeholder: &str, value: &str) -> String {
    if placeholder.is_empty() {
        return content.to_string();
    }
    content.replace(placeholder, value)
}

/// Read a manifest template and replace `placeholder` with `value`
pub fn replace_yaml_for_template(path: &Path, value: &str, placeholder: &str) -> Result<Vec<u8>> {
    let content = read_text(path)?;
    Ok(substitute(&content, placeholder, value).into_bytes())
}
