//! Host-facing plugin entry point.
//!
//! Filters module ids the way a bundler plugin would and dispatches the rest
//! to the dialect transformers.

use rayon::prelude::*;

use crate::options::{BuildCommand, PluginOptions, TransformOptions};
use crate::source::SourceFile;
use crate::{transform, TransformResult};

const DEPENDENCY_DIR: &str = "node_modules";

#[derive(Debug, Clone)]
pub struct SourceIdentifier {
    options: PluginOptions,
    transform_options: TransformOptions,
}

impl SourceIdentifier {
    /// Build a plugin. Without a configured `root`, paths are made relative to
    /// the current working directory.
    pub fn new(options: PluginOptions) -> Self {
        let cwd = std::env::current_dir()
            .ok()
            .map(|dir| dir.to_string_lossy().into_owned());
        Self::with_fallback_root(options, cwd.as_deref())
    }

    pub fn with_fallback_root(options: PluginOptions, fallback_root: Option<&str>) -> Self {
        let transform_options = options.transform_options(fallback_root);
        Self {
            options,
            transform_options,
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn transform_options(&self) -> &TransformOptions {
        &self.transform_options
    }

    /// Whether the plugin runs for `command`. Dev-server only unless
    /// `enabled` says otherwise.
    pub fn applies_to(&self, command: BuildCommand) -> bool {
        self.options
            .enabled
            .unwrap_or(command == BuildCommand::Serve)
    }

    /// Whether a module id is eligible for transformation at all.
    pub fn accepts(&self, id: &str) -> bool {
        if id.contains(DEPENDENCY_DIR) {
            return false;
        }
        if self.options.exclude.iter().any(|pattern| id.contains(pattern.as_str())) {
            return false;
        }
        self.options.include.iter().any(|ext| id.ends_with(ext.as_str()))
    }

    /// Transform one module. `None` means keep the original code and map.
    pub fn transform(&self, code: &str, id: &str) -> Option<TransformResult> {
        if !self.accepts(id) {
            return None;
        }
        let source = SourceFile::new(code, id)?;
        transform(&source, &self.transform_options)
    }

    /// Transform `(code, id)` pairs in parallel; results keep input order.
    pub fn transform_batch(&self, modules: &[(String, String)]) -> Vec<Option<TransformResult>> {
        tracing::trace!(modules = modules.len(), "scheduling batch transform");
        modules
            .par_iter()
            .map(|(code, id)| self.transform(code, id))
            .collect()
    }
}

impl Default for SourceIdentifier {
    fn default() -> Self {
        Self::new(PluginOptions::default())
    }
}
