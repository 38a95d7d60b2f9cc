//! Paragraph accumulation over classified sentences.
//!
//! A sentence is either a header (emitted on its own) or body text that
//! joins the pending paragraph. The pending paragraph is flushed on a
//! header, on a topic shift, once it reaches [`PARAGRAPH_SENTENCE_CAP`]
//! sentences, and at end of input.

use crate::narrative::NarrativeBlock;

/// Sentences shorter than this that lack a closing period read as headers.
pub const HEADER_MAX_CHARS: usize = 80;

/// Soft cap on sentences per paragraph.
pub const PARAGRAPH_SENTENCE_CAP: usize = 3;

/// Lower-case openers that start a new topic.
pub const TOPIC_SHIFT_OPENERS: [&str; 6] = [
    "additionally",
    "furthermore",
    "moreover",
    "however",
    "in addition",
    "on the other hand",
];

pub fn is_header(sentence: &str) -> bool {
    sentence.ends_with(':')
        || (sentence.chars().count() < HEADER_MAX_CHARS && !sentence.ends_with('.'))
}

pub fn starts_new_topic(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    TOPIC_SHIFT_OPENERS
        .iter()
        .any(|opener| lowered.starts_with(opener))
}

/// Pending sentences plus the blocks emitted so far.
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    pending: Vec<String>,
    blocks: Vec<NarrativeBlock>,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits the pending sentences as one paragraph. No-op when empty.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let paragraph = self.pending.join(" ");
        self.pending.clear();
        self.blocks.push(NarrativeBlock::Paragraph(paragraph));
    }

    pub fn push_sentence(&mut self, sentence: &str) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return;
        }

        if is_header(sentence) {
            self.flush();
            self.blocks.push(NarrativeBlock::Header(sentence.to_string()));
            return;
        }

        if starts_new_topic(sentence) && !self.pending.is_empty() {
            self.flush();
        }
        self.pending.push(sentence.to_string());

        if self.pending.len() >= PARAGRAPH_SENTENCE_CAP {
            self.flush();
        }
    }

    pub fn finish(mut self) -> Vec<NarrativeBlock> {
        self.flush();
        self.blocks
    }
}
