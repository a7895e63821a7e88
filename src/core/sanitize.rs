// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z][a-zA-Z0-9]{1,31});").expect("entity pattern")
});

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern"));

fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "nbsp" => " ",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "rsquo" | "lsquo" => "'",
        "rdquo" | "ldquo" => "\"",
        "ndash" => "–",
        "mdash" => "—",
        "minus" => "\u{2212}",
        "hellip" => "…",
        "times" => "×",
        "frac12" => "½",
        "frac14" => "¼",
        "frac34" => "¾",
        "deg" => "°",
        "copy" => "©",
        _ => return None,
    })
}

/// Decode numeric entities and the named ones that show up in rules text.
/// Unknown names are left as written.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    ENTITY
        .replace_all(s, |caps: &Captures| {
            let body = &caps[1];
            let code = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                return named_entity(body).map(|v| s!(v)).unwrap_or_else(|| s!(&caps[0]));
            };
            match code.and_then(char::from_u32) {
                Some('\u{a0}') => s!(" "),
                Some(ch) => ch.to_string(),
                None => s!(&caps[0]),
            }
        })
        .into_owned()
}

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

/// Split prose after `.`, `!` or `?` when whitespace follows. The
/// punctuation stays with its sentence. Fragments are trimmed but keep their
/// inner line breaks; empty ones are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut last = 0usize;
    for m in SENTENCE_END.find_iter(text) {
        // punctuation is one ASCII byte
        push_fragment(&mut out, &text[last..m.start() + 1]);
        last = m.end();
    }
    push_fragment(&mut out, &text[last..]);
    out
}

fn push_fragment(out: &mut Vec<String>, raw: &str) {
    let frag = raw.trim();
    if !frag.is_empty() {
        out.push(s!(frag));
    }
}
