//! Source model shared by both dialect transformers.
//!
//! A `SourceFile` is the immutable input of one transform call. `LineIndex`
//! turns byte offsets into the `line:column` pairs used by the identifier
//! attributes, and `FileIdentity` carries the root-relative path and base file
//! name derived from the file path and the configured project root.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// DIALECTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Markup syntax of a source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dialect {
    /// JSX / TSX: markup embedded in component expressions.
    Jsx,
    /// Vue single-file components: markup in a `<template>` block.
    Vue,
}

impl Dialect {
    pub fn from_path(path: &str) -> Option<Self> {
        if path.ends_with(".jsx") || path.ends_with(".tsx") {
            Some(Dialect::Jsx)
        } else if path.ends_with(".vue") {
            Some(Dialect::Vue)
        } else {
            None
        }
    }
}

/// Immutable input of a single transform.
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'s> {
    pub text: &'s str,
    pub path: &'s str,
    pub dialect: Dialect,
}

impl<'s> SourceFile<'s> {
    /// Returns `None` when the extension maps to no supported dialect.
    pub fn new(text: &'s str, path: &'s str) -> Option<Self> {
        Dialect::from_path(path).map(|dialect| Self {
            text,
            path,
            dialect,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// POSITIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Location of an element in the original source.
///
/// `line` is 1-based, `column` is 0-based and counted in UTF-16 code units so
/// ids match what JavaScript tooling reports for the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

/// Byte offset → line/column lookup for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex<'s> {
    text: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    pub fn new(text: &'s str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = text.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            match ch {
                '\n' | '\u{2028}' | '\u{2029}' => line_starts.push(i + ch.len_utf8()),
                // `\r\n` breaks once, at the `\n`
                '\r' if chars.peek().map(|&(_, next)| next) != Some('\n') => {
                    line_starts.push(i + 1)
                }
                _ => {}
            }
        }
        Self { text, line_starts }
    }

    pub fn position(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.text.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self
            .text
            .get(line_start..offset)
            .map(|prefix| prefix.encode_utf16().count())
            .unwrap_or(0);

        SourcePosition {
            line: line_idx as u32 + 1,
            column: column as u32,
            offset,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FILE IDENTITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Path strings written into the identifier attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIdentity {
    /// Path relative to the project root, `/`-separated, no leading slash.
    pub relative_path: String,
    /// Last path segment.
    pub file_name: String,
}

impl FileIdentity {
    pub fn new(file_path: &str, root: Option<&str>) -> Self {
        let normalized = file_path.replace('\\', "/");
        let relative = match root.map(|r| r.replace('\\', "/")) {
            Some(root) if !root.is_empty() => {
                let root = root.trim_end_matches('/');
                normalized
                    .strip_prefix(root)
                    .map(str::to_string)
                    .unwrap_or_else(|| normalized.clone())
            }
            _ => normalized.clone(),
        };
        let relative_path = relative.trim_start_matches('/').to_string();
        let file_name = normalized
            .rsplit('/')
            .next()
            .unwrap_or(normalized.as_str())
            .to_string();

        Self {
            relative_path,
            file_name,
        }
    }
}
