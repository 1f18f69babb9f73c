// src/core/text.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split long-form copy on blank lines. CRLF-tolerant; empty chunks dropped.
pub fn paragraphs(s: &str) -> Vec<&str> {
    s.split("\n\n")
        .map(|p| p.trim_matches(['\r', '\n', ' ', '\t']))
        .filter(|p| !p.is_empty())
        .collect()
}

/// First `max_chars` characters, cut on a char boundary, trailing
/// whitespace dropped. Returns the whole string when it is short enough.
pub fn preview(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].trim_end(),
        None => s,
    }
}
