//! Narrative formatting for free-text match justifications.
//!
//! Stages, in order: whitespace normalization → fraction emphasis →
//! sentence segmentation → header/paragraph classification → final flush.
//! The result is an ordered list of blocks; nothing is reordered once
//! emitted.

pub mod blocks;
pub mod emphasis;
pub mod inline;
pub mod segment;

use serde::{Deserialize, Serialize};

use crate::narrative::blocks::ParagraphBuilder;
use crate::narrative::emphasis::apply_emphasis;
use crate::narrative::segment::{normalize_whitespace, split_sentences};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum NarrativeBlock {
    Header(String),
    Paragraph(String),
}

/// Formats one justification string into blocks. Empty or whitespace-only
/// input yields no blocks.
pub fn format_justification(text: &str) -> Vec<NarrativeBlock> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let emphasized = apply_emphasis(&normalized);
    let mut builder = ParagraphBuilder::new();
    for sentence in split_sentences(&emphasized) {
        builder.push_sentence(sentence);
    }
    builder.finish()
}

/// Plain-text rendering for `white-space: pre-line` surfaces: a header ends
/// its line, a paragraph is followed by a blank line.
pub fn render_text(blocks: &[NarrativeBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            NarrativeBlock::Header(text) => {
                out.push_str(text);
                out.push('\n');
            }
            NarrativeBlock::Paragraph(text) => {
                out.push_str(text);
                out.push_str("\n\n");
            }
        }
    }
    out.trim().to_string()
}
