//! Configuration for the identifier pass.
//!
//! `PluginOptions` is what a host hands over (camelCase, every field optional).
//! `TransformOptions` is the subset the dialect transformers read.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "data-lov";

fn default_attribute_prefix() -> String {
    DEFAULT_ATTRIBUTE_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

fn default_include() -> Vec<String> {
    vec![".jsx".to_string(), ".tsx".to_string(), ".vue".to_string()]
}

/// Options read by the dialect transformers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOptions {
    /// Prefix of the `-id` / `-name` attributes.
    #[serde(default = "default_attribute_prefix")]
    pub attribute_prefix: String,
    /// Attach `data-component-content`.
    #[serde(default = "default_true")]
    pub include_props: bool,
    /// Project root stripped from file paths. `None` keeps paths as given.
    #[serde(default)]
    pub root: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            attribute_prefix: default_attribute_prefix(),
            include_props: true,
            root: None,
        }
    }
}

impl TransformOptions {
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Name of the identifier attribute, e.g. `data-lov-id`.
    pub fn id_attribute(&self) -> String {
        format!("{}-id", self.attribute_prefix)
    }

    /// Name of the tag-name attribute, e.g. `data-lov-name`.
    pub fn name_attribute(&self) -> String {
        format!("{}-name", self.attribute_prefix)
    }
}

/// Host-facing configuration of the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Overrides the serve-only default.
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default = "default_attribute_prefix")]
    pub attribute_prefix: String,
    #[serde(default = "default_true")]
    pub include_props: bool,
    /// File extensions to transform.
    #[serde(default = "default_include")]
    pub include: Vec<String>,
    /// Path substrings to leave untouched.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub root: Option<String>,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            enabled: None,
            attribute_prefix: default_attribute_prefix(),
            include_props: true,
            include: default_include(),
            exclude: Vec::new(),
            root: None,
        }
    }
}

impl PluginOptions {
    /// Transformer options; `root` falls back to `fallback_root`.
    pub fn transform_options(&self, fallback_root: Option<&str>) -> TransformOptions {
        TransformOptions {
            attribute_prefix: self.attribute_prefix.clone(),
            include_props: self.include_props,
            root: self
                .root
                .clone()
                .or_else(|| fallback_root.map(str::to_string)),
        }
    }
}

/// Host command the plugin runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildCommand {
    Serve,
    Build,
}
