//! Emphasis marking for embedded fractional scores such as `(1.5/3)` or `4/4`.
//!
//! Rules run in a fixed precedence order over the same input. Every accepted
//! match is recorded as a span; a later rule's match that overlaps any
//! recorded span (or emphasis already present in the text) is dropped, so
//! nothing is wrapped twice.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

pub const EMPHASIS_OPEN: &str = "<strong>";
pub const EMPHASIS_CLOSE: &str = "</strong>";

struct EmphasisRule {
    name: &'static str,
    pattern: Regex,
    /// Parentheses stay outside the emphasis when rendered.
    parenthesized: bool,
}

impl EmphasisRule {
    fn new(name: &'static str, pattern: &str, parenthesized: bool) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("emphasis pattern is valid"),
            parenthesized,
        }
    }
}

static EMPHASIS_RULES: Lazy<Vec<EmphasisRule>> = Lazy::new(|| {
    vec![
        EmphasisRule::new(
            "paren_decimal_decimal",
            r"\(([0-9]+\.[0-9]+)/([0-9]+\.[0-9]+)\)",
            true,
        ),
        // (4.0/4) renders as 4/4: the trailing ".0" is dropped
        EmphasisRule::new(
            "paren_whole_point_zero",
            r"\(([0-9]+)\.0/([0-9]+\.?[0-9]*)\)",
            true,
        ),
        EmphasisRule::new(
            "paren_decimal_integer",
            r"\(([0-9]+\.[0-9]+)/([0-9]+)\)",
            true,
        ),
        EmphasisRule::new(
            "paren_integer_decimal",
            r"\(([0-9]+)/([0-9]+\.[0-9]+)\)",
            true,
        ),
        EmphasisRule::new("paren_integer_integer", r"\(([0-9]+)/([0-9]+)\)", true),
        EmphasisRule::new("decimal_decimal", r"([0-9]+\.[0-9]+)/([0-9]+\.[0-9]+)", false),
        EmphasisRule::new("decimal_integer", r"([0-9]+\.[0-9]+)/([0-9]+)", false),
        EmphasisRule::new("integer_integer", r"([0-9]+)/([0-9]+)", false),
    ]
});

/// A matched fraction awaiting emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisSpan {
    /// Byte range of the whole match, parentheses included.
    pub range: Range<usize>,
    pub rule: &'static str,
    /// Text rendered inside the emphasis markers.
    pub content: String,
    pub parenthesized: bool,
}

impl EmphasisSpan {
    fn render(&self) -> String {
        let marked = format!("{EMPHASIS_OPEN}{}{EMPHASIS_CLOSE}", self.content);
        if self.parenthesized {
            format!("({marked})")
        } else {
            marked
        }
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Byte ranges of emphasis already present in `text`, markers included.
/// An unclosed opening marker is ignored.
pub fn existing_emphasis(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut cursor = 0;
    while let Some(open) = text[cursor..].find(EMPHASIS_OPEN) {
        let start = cursor + open;
        let body = start + EMPHASIS_OPEN.len();
        match text[body..].find(EMPHASIS_CLOSE) {
            Some(close) => {
                let end = body + close + EMPHASIS_CLOSE.len();
                ranges.push(start..end);
                cursor = end;
            }
            None => break,
        }
    }
    ranges
}

/// Runs every rule in precedence order and returns the accepted spans,
/// sorted by position.
pub fn find_emphasis_spans(text: &str) -> Vec<EmphasisSpan> {
    let taken = existing_emphasis(text);
    let mut spans: Vec<EmphasisSpan> = Vec::new();

    for rule in EMPHASIS_RULES.iter() {
        for caps in rule.pattern.captures_iter(text) {
            let (Some(whole), Some(left), Some(right)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let range = whole.range();
            if taken.iter().any(|t| overlaps(t, &range))
                || spans.iter().any(|s| overlaps(&s.range, &range))
            {
                continue;
            }
            spans.push(EmphasisSpan {
                range,
                rule: rule.name,
                content: format!("{}/{}", left.as_str(), right.as_str()),
                parenthesized: rule.parenthesized,
            });
        }
    }

    spans.sort_by_key(|s| s.range.start);
    spans
}

/// Wraps every fractional score in `text` with emphasis markers.
pub fn apply_emphasis(text: &str) -> String {
    let spans = find_emphasis_spans(text);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + spans.len() * 20);
    let mut cursor = 0;
    for span in &spans {
        trace!(rule = span.rule, content = %span.content, "Emphasizing score fraction");
        out.push_str(&text[cursor..span.range.start]);
        out.push_str(&span.render());
        cursor = span.range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_fired(text: &str) -> Vec<&'static str> {
        find_emphasis_spans(text).iter().map(|s| s.rule).collect()
    }

    #[test]
    fn test_parenthesized_decimal_pair_takes_precedence() {
        assert_eq!(rules_fired("(1.5/1.5)"), vec!["paren_decimal_decimal"]);
        assert_eq!(apply_emphasis("(1.5/1.5)"), "(<strong>1.5/1.5</strong>)");
    }

    #[test]
    fn test_point_zero_numerator_is_shortened() {
        assert_eq!(rules_fired("(4.0/4)"), vec!["paren_whole_point_zero"]);
        assert_eq!(apply_emphasis("(4.0/4)"), "(<strong>4/4</strong>)");
    }

    #[test]
    fn test_each_parenthesized_shape() {
        assert_eq!(rules_fired("(1.5/3)"), vec!["paren_decimal_integer"]);
        assert_eq!(rules_fired("(4/1.5)"), vec!["paren_integer_decimal"]);
        assert_eq!(rules_fired("(4/4)"), vec!["paren_integer_integer"]);
        assert_eq!(apply_emphasis("(2/4)"), "(<strong>2/4</strong>)");
    }

    #[test]
    fn test_unparenthesized_shapes() {
        assert_eq!(rules_fired("scored 1.5/2.5"), vec!["decimal_decimal"]);
        assert_eq!(rules_fired("scored 2.5/3"), vec!["decimal_integer"]);
        assert_eq!(rules_fired("scored 3/4"), vec!["integer_integer"]);
        assert_eq!(apply_emphasis("scored 3/4 overall"), "scored <strong>3/4</strong> overall");
    }

    #[test]
    fn test_multiple_fractions_in_document_order() {
        let out = apply_emphasis("Rust (3/4), Go 1.5/2 and SQL (0.5/1.0).");
        assert_eq!(
            out,
            "Rust (<strong>3/4</strong>), Go <strong>1.5/2</strong> and SQL (<strong>0.5/1.0</strong>)."
        );
    }

    #[test]
    fn test_existing_emphasis_is_not_rewrapped() {
        let text = "already <strong>10/20</strong> marked";
        assert!(find_emphasis_spans(text).is_empty());
        assert_eq!(apply_emphasis(text), text);
    }

    #[test]
    fn test_no_fractions_leaves_text_untouched() {
        assert_eq!(apply_emphasis("No scores here."), "No scores here.");
        assert_eq!(apply_emphasis(""), "");
    }

    #[test]
    fn test_existing_emphasis_ranges() {
        let text = "a <strong>b</strong> c <strong>d";
        assert_eq!(existing_emphasis(text), vec![2..20]);
    }
}
