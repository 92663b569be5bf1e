//! # Source Identifier
//!
//! Build-time pass that tags every safe UI element with traceability
//! attributes: the originating file, line and column, the element or component
//! name, and a percent-encoded JSON snapshot of its literal attributes.
//!
//! ## Dialects
//!
//! - **JSX / TSX** (`.jsx`, `.tsx`): parsed with oxc, attributes are appended to
//!   the AST, and the module is regenerated with a source map.
//! - **Vue SFC** (`.vue`): the `<template>` block is parsed with span tracking
//!   and attributes are spliced into the original text after each tag name.
//!
//! Both dialects share one classifier, one property extractor and one
//! attribute synthesizer, so the same element produces the same attribute
//! names in the same order in either syntax.
//!
//! ## Invariants
//!
//! 1. **Idempotence**: an element that already carries `{prefix}-id` is left
//!    alone, and a pass that changes nothing returns `None`.
//! 2. **Determinism**: output depends only on `(code, path, options)`.
//! 3. **Pass-through on failure**: unparsable input is logged and returned
//!    untouched.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

pub mod classify;
pub mod error;
pub mod extract;
pub mod jsx_transform;
pub mod options;
pub mod plugin;
pub mod source;
pub mod splice;
pub mod synthesize;
pub mod template_parse;
pub mod vue_transform;

#[cfg(feature = "napi")]
mod napi_bridge;

#[cfg(test)]
mod jsx_tests;

#[cfg(feature = "napi")]
pub use napi_bridge::{applies_to_native, transform_native};

pub use classify::{classify, ClassificationVerdict};
pub use error::TransformError;
pub use extract::{PropValue, PropertyMap};
pub use jsx_transform::{transform_jsx, try_transform_jsx};
pub use options::{BuildCommand, PluginOptions, TransformOptions};
pub use plugin::SourceIdentifier;
pub use source::{Dialect, SourceFile};
pub use synthesize::IdentifierAttributes;
pub use vue_transform::{transform_vue, try_transform_vue};

/// Transformed module. `map` is a source map v3 JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
pub struct TransformResult {
    pub code: String,
    pub map: String,
}

/// Annotate one source file. `None` means keep the original code and map.
pub fn transform(source: &SourceFile<'_>, options: &TransformOptions) -> Option<TransformResult> {
    match source.dialect {
        Dialect::Jsx => transform_jsx(source.text, source.path, options),
        Dialect::Vue => transform_vue(source.text, source.path, options),
    }
}
