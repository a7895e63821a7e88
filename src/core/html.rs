// src/core/html.rs
//
// Regex-level cleanup for prose pages: drop script/style blocks and
// comments, drop every remaining tag, then locate textual anchors in what
// is left.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::sanitize::decode_entities;

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"));

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script pattern")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("style pattern")
});

// An opener whose closer never arrives swallows the rest of the document.
static DANGLING_RAW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b.*$").expect("dangling pattern")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("tag pattern"));

/// Remove `<script>` and `<style>` blocks including their bodies, then
/// comments. Raw blocks go first so a `<!--` inside a script string cannot
/// pair with a `-->` further down the page.
pub fn strip_scripts(markup: &str) -> String {
    let s = SCRIPT_BLOCK.replace_all(markup, "");
    let s = STYLE_BLOCK.replace_all(&s, "");
    let s = COMMENT.replace_all(&s, "");
    DANGLING_RAW.replace(&s, "").into_owned()
}

/// Remove every `<...>` tag, keeping the text between them.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    TAG.replace_all(s.as_ref(), "").into_owned()
}

/// Scripts out, tags out, entities decoded. Whitespace is left alone so
/// anchor offsets stay meaningful.
pub fn clean_text(markup: &str) -> String {
    decode_entities(&strip_tags(strip_scripts(markup)))
}

/// Case-insensitive matcher for a literal anchor. Runs of whitespace in the
/// anchor match any run of whitespace in the text. `None` for a blank anchor.
pub fn anchor_regex(anchor: &str) -> Option<Regex> {
    let words: Vec<String> = anchor.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }
    RegexBuilder::new(&words.join(r"\s+"))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Byte range of the first case-insensitive occurrence of `anchor` in `text`
/// at or after `from`.
pub fn find_ci(text: &str, anchor: &str, from: usize) -> Option<(usize, usize)> {
    let re = anchor_regex(anchor)?;
    let m = re.find_at(text, from)?;
    Some((m.start(), m.end()))
}
