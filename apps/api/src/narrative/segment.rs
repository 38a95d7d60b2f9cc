/// Collapses every whitespace run to one space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits wherever a period is followed by whitespace and then an ASCII
/// upper-case letter. The period stays with the preceding sentence; blank
/// fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch != '.' {
            continue;
        }
        let gap_start = idx + ch.len_utf8();
        let mut gap_end = gap_start;
        while let Some(&(next_idx, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            gap_end = next_idx + next.len_utf8();
            chars.next();
        }
        let capital_follows = chars
            .peek()
            .is_some_and(|&(_, next)| next.is_ascii_uppercase());
        if gap_end > gap_start && capital_follows {
            fragments.push(&text[start..gap_start]);
            start = gap_end;
        }
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
