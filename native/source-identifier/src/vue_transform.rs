//! Vue single-file-component identifier pass.
//!
//! Elements of the first HTML `<template>` block receive identifier attributes
//! spliced into the original text right after their tag name. The rest of the
//! file is left byte-for-byte intact.

use crate::classify::classify;
use crate::error::TransformError;
use crate::extract::extract_template_props;
use crate::options::TransformOptions;
use crate::source::{FileIdentity, LineIndex};
use crate::splice::SpliceBuffer;
use crate::synthesize::synthesize;
use crate::template_parse::{parse_sfc, walk_elements, ElementNode};
use crate::TransformResult;

struct TemplateAnnotator<'s, 'o> {
    options: &'o TransformOptions,
    identity: FileIdentity,
    lines: LineIndex<'s>,
    id_attribute: String,
    buffer: SpliceBuffer<'s>,
}

impl<'s, 'o> TemplateAnnotator<'s, 'o> {
    fn annotate(&mut self, element: &ElementNode) {
        let verdict = classify(&element.tag);
        if !verdict.is_annotatable() {
            tracing::debug!(file = %self.identity.relative_path, tag = %element.tag, ?verdict, "skipping element");
            return;
        }
        if element.has_attribute(&self.id_attribute) {
            return;
        }

        let props = extract_template_props(&element.props);
        let position = self.lines.position(element.start);
        let attrs = synthesize(&self.identity, position, &element.tag, &props, self.options);

        self.buffer.insert(element.tag_name_end, attrs.to_markup());
        tracing::debug!(file = %self.identity.relative_path, tag = %element.tag, ?verdict, id = %attrs.id, "annotated element");
    }
}

/// Annotate a `.vue` file.
///
/// Returns `Ok(None)` when the file has no HTML template or nothing in it
/// needed attributes.
pub fn try_transform_vue(
    code: &str,
    path: &str,
    options: &TransformOptions,
) -> Result<Option<TransformResult>, TransformError> {
    let sfc = parse_sfc(code).map_err(|err| TransformError::from_template(path, err))?;
    let Some(template) = sfc.template else {
        return Ok(None);
    };

    let mut annotator = TemplateAnnotator {
        options,
        identity: FileIdentity::new(path, options.root.as_deref()),
        lines: LineIndex::new(code),
        id_attribute: options.id_attribute(),
        buffer: SpliceBuffer::new(code),
    };
    walk_elements(&template.children, &mut |element| annotator.annotate(element));

    if annotator.buffer.is_empty() {
        return Ok(None);
    }

    Ok(Some(TransformResult {
        code: annotator.buffer.finish(),
        map: annotator.buffer.generate_map(path),
    }))
}

/// Like [`try_transform_vue`], but failures are logged and the file passes through.
pub fn transform_vue(code: &str, path: &str, options: &TransformOptions) -> Option<TransformResult> {
    match try_transform_vue(code, path, options) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(file = path, error = %err, "leaving Vue source untouched");
            None
        }
    }
}
