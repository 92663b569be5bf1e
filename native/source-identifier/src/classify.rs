//! Component classification.
//!
//! Decides from the tag name alone whether an element is a platform tag, a
//! first-party component, or a component from a third-party runtime that may
//! reject unknown attributes and must be left alone.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

lazy_static! {
    /// Standard platform tags that always accept `data-*` attributes.
    static ref PLATFORM_TAGS: HashSet<&'static str> = [
        // document
        "html", "head", "body", "title", "meta", "link", "style", "script",
        // sectioning
        "header", "nav", "main", "section", "article", "aside", "footer",
        "h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "span",
        // text formatting
        "strong", "b", "em", "i", "u", "s", "small", "mark", "del", "ins",
        "sub", "sup", "code", "kbd", "samp", "var", "pre", "blockquote", "cite",
        // lists
        "ul", "ol", "li", "dl", "dt", "dd",
        // links and media
        "a", "img", "audio", "video", "source", "track", "canvas", "svg",
        "picture", "figure", "figcaption", "embed", "object", "param", "iframe",
        // tables
        "table", "thead", "tbody", "tfoot", "tr", "th", "td", "caption", "colgroup", "col",
        // forms
        "form", "fieldset", "legend", "label", "input", "textarea", "select", "option",
        "optgroup", "button", "datalist", "output", "progress", "meter",
        // interactive
        "details", "summary", "dialog",
        // misc
        "br", "hr", "wbr", "area", "map", "time", "data", "abbr", "address",
        "bdi", "bdo", "dfn", "q", "ruby", "rb", "rt", "rtc", "rp",
    ]
    .into_iter()
    .collect();

    /// Components from third-party runtimes known to validate their props.
    static ref FOREIGN_COMPONENTS: HashSet<&'static str> = [
        // scene-graph primitives
        "ambientLight", "directionalLight", "pointLight", "spotLight", "hemisphereLight",
        "mesh", "group", "scene", "camera", "perspectiveCamera", "orthographicCamera",
        "geometry", "material", "texture", "Canvas", "primitive",
        "boxGeometry", "sphereGeometry", "planeGeometry", "cylinderGeometry",
        "meshBasicMaterial", "meshStandardMaterial", "meshPhongMaterial",
        // scene helpers
        "OrbitControls", "TransformControls", "Stats", "Environment", "Sky",
        "ContactShadows", "BakeShadows", "softShadows", "Html", "Text",
        // runtime wrappers
        "Suspense", "ErrorBoundary", "Provider", "Consumer",
    ]
    .into_iter()
    .collect();
}

/// Annotation policy for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassificationVerdict {
    /// Platform element, safe to annotate.
    Host,
    /// Component owned by the project, safe to annotate.
    FirstParty,
    /// Third-party component, never annotated.
    ForeignSkip,
}

impl ClassificationVerdict {
    pub fn is_annotatable(self) -> bool {
        !matches!(self, ClassificationVerdict::ForeignSkip)
    }
}

/// Check whether a tag is one of the standard platform tags.
pub fn is_platform_tag(tag_name: &str) -> bool {
    PLATFORM_TAGS.contains(tag_name)
}

/// Classify a tag name.
///
/// Lowercase names that are not platform tags are treated as custom elements
/// from a third-party library. This also covers hyphenated web components such
/// as `my-widget`, which are skipped as well.
pub fn classify(tag_name: &str) -> ClassificationVerdict {
    if FOREIGN_COMPONENTS.contains(tag_name) {
        return ClassificationVerdict::ForeignSkip;
    }

    match tag_name.chars().next() {
        None => ClassificationVerdict::ForeignSkip,
        Some(first) if first.is_ascii_lowercase() => {
            if is_platform_tag(tag_name) {
                ClassificationVerdict::Host
            } else {
                ClassificationVerdict::ForeignSkip
            }
        }
        Some(_) => ClassificationVerdict::FirstParty,
    }
}
