//! Node-API exports for JavaScript bundler plugins.
//!
//! Options arrive as plain JS objects and go through serde, so every field a
//! caller leaves out takes its default.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::options::{BuildCommand, PluginOptions};
use crate::plugin::SourceIdentifier;
use crate::TransformResult;

fn plugin_from(options: Option<serde_json::Value>) -> Result<SourceIdentifier> {
    let options: PluginOptions = match options {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| Error::new(Status::InvalidArg, format!("invalid options: {}", e)))?,
        None => PluginOptions::default(),
    };
    Ok(SourceIdentifier::new(options))
}

/// `transformNative(code, id, options?)` → `{ code, map } | null`.
#[napi]
pub fn transform_native(
    code: String,
    id: String,
    options: Option<serde_json::Value>,
) -> Result<Option<TransformResult>> {
    Ok(plugin_from(options)?.transform(&code, &id))
}

/// `appliesToNative("serve" | "build", options?)`.
#[napi]
pub fn applies_to_native(command: String, options: Option<serde_json::Value>) -> Result<bool> {
    let command = match command.as_str() {
        "serve" => BuildCommand::Serve,
        "build" => BuildCommand::Build,
        other => {
            return Err(Error::new(
                Status::InvalidArg,
                format!("unknown command: {}", other),
            ))
        }
    };
    Ok(plugin_from(options)?.applies_to(command))
}
