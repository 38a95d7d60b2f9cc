//! Inline markup in matcher-produced text: HTML character references and
//! `**bold**` runs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::narrative::emphasis::{EMPHASIS_CLOSE, EMPHASIS_OPEN};

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

/// Longest entity body we try to resolve, e.g. `#x1F600`.
const MAX_ENTITY_LEN: usize = 10;

fn resolve_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let numeric = body.strip_prefix('#')?;
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Decodes named (`&amp;` …) and numeric (`&#39;`, `&#x27;`) character
/// references. Anything unrecognised is left as written.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi > 0 && semi <= MAX_ENTITY_LEN)
            .and_then(|semi| resolve_entity(&tail[..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Turns `**text**` into emphasis markers.
pub fn convert_bold(text: &str) -> String {
    BOLD_RE
        .replace_all(text, format!("{EMPHASIS_OPEN}$1{EMPHASIS_CLOSE}").as_str())
        .into_owned()
}

/// Entity decoding followed by bold conversion.
pub fn decode_inline_markup(text: &str) -> String {
    convert_bold(&decode_entities(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(
            decode_entities("R&amp;D &lt;team&gt; &quot;lead&quot;"),
            "R&D <team> \"lead\""
        );
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entities("it&#39;s &#x27;ok&#X27;"), "it's 'ok'");
    }

    #[test]
    fn test_unknown_or_bare_ampersand_kept() {
        assert_eq!(decode_entities("AT&T; Q&A &bogus;"), "AT&T; Q&A &bogus;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn test_bold_runs_become_emphasis() {
        assert_eq!(
            convert_bold("**Rust** and **Go** experience"),
            "<strong>Rust</strong> and <strong>Go</strong> experience"
        );
        assert_eq!(convert_bold("a ** b"), "a ** b");
    }

    #[test]
    fn test_decode_then_bold() {
        assert_eq!(
            decode_inline_markup("**C&amp;C++** expert"),
            "<strong>C&C++</strong> expert"
        );
    }
}
