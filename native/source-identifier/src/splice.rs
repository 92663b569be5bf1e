//! Insertion-only edit buffer over an original source text.
//!
//! Edits are recorded against offsets in the original text and applied in one
//! pass. The buffer also produces a coarse source map: one mapping at the start
//! of every untouched chunk and of every original line, with inserted text left
//! unmapped.

use oxc_sourcemap::SourceMapBuilder;

use crate::source::LineIndex;

#[derive(Debug, Clone)]
pub struct SpliceBuffer<'s> {
    original: &'s str,
    /// `(offset, text)`; same-offset inserts keep their insertion order.
    inserts: Vec<(usize, String)>,
}

impl<'s> SpliceBuffer<'s> {
    pub fn new(original: &'s str) -> Self {
        Self {
            original,
            inserts: Vec::new(),
        }
    }

    /// Insert `text` before the original character at `offset`.
    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        let offset = offset.min(self.original.len());
        self.inserts.push((offset, text.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty()
    }

    fn sorted_inserts(&self) -> Vec<&(usize, String)> {
        let mut sorted: Vec<&(usize, String)> = self.inserts.iter().collect();
        // stable, so equal offsets keep insertion order
        sorted.sort_by_key(|(offset, _)| *offset);
        sorted
    }

    /// Original text with every insert applied.
    pub fn finish(&self) -> String {
        let extra: usize = self.inserts.iter().map(|(_, text)| text.len()).sum();
        let mut out = String::with_capacity(self.original.len() + extra);
        let mut cursor = 0;
        for (offset, text) in self.sorted_inserts() {
            out.push_str(&self.original[cursor..*offset]);
            out.push_str(text);
            cursor = *offset;
        }
        out.push_str(&self.original[cursor..]);
        out
    }

    /// Source map v3 JSON for [`finish`](Self::finish), with the original
    /// text embedded as source content.
    pub fn generate_map(&self, source_path: &str) -> String {
        let mut builder = SourceMapBuilder::default();
        let source_id = builder.set_source_and_content(source_path, self.original);
        let lines = LineIndex::new(self.original);

        let mut generated = GeneratedCursor::default();
        let mut cursor = 0;
        let mut boundaries: Vec<(usize, Option<&str>)> = self
            .sorted_inserts()
            .into_iter()
            .map(|(offset, text)| (*offset, Some(text.as_str())))
            .collect();
        boundaries.push((self.original.len(), None));

        for (offset, inserted) in boundaries {
            let chunk = &self.original[cursor..offset];
            if !chunk.is_empty() {
                let mut map_next = true;
                for (i, ch) in chunk.char_indices() {
                    if map_next {
                        let src = lines.position(cursor + i);
                        builder.add_token(
                            generated.line,
                            generated.column,
                            src.line - 1,
                            src.column,
                            Some(source_id),
                            None,
                        );
                        map_next = false;
                    }
                    generated.advance(ch);
                    if ch == '\n' {
                        map_next = true;
                    }
                }
            }
            if let Some(text) = inserted {
                text.chars().for_each(|ch| generated.advance(ch));
            }
            cursor = offset;
        }

        builder.into_sourcemap().to_json_string()
    }
}

/// Line/column in the generated text, columns in UTF-16 units.
#[derive(Debug, Default)]
struct GeneratedCursor {
    line: u32,
    column: u32,
}

impl GeneratedCursor {
    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += ch.len_utf16() as u32;
        }
    }
}
